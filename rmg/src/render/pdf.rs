//! PDF emission for a laid-out document

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};
use tracing::debug;

use super::RenderError;
use super::layout::{DocumentLayout, Page, PageSetup, Typeface};

fn builtin_font(typeface: Typeface) -> BuiltinFont {
    match typeface {
        Typeface::Courier => BuiltinFont::Courier,
        Typeface::Helvetica => BuiltinFont::Helvetica,
    }
}

/// Characters WinAnsiEncoding places in 0x80..=0x9F
const WIN_ANSI_EXTRAS: &str = "\u{20ac}\u{201a}\u{192}\u{201e}\u{2026}\u{2020}\u{2021}\u{2c6}\u{2030}\u{160}\u{2039}\u{152}\u{17d}\
                               \u{2018}\u{2019}\u{201c}\u{201d}\u{2022}\u{2013}\u{2014}\u{2dc}\u{2122}\u{161}\u{203a}\u{153}\u{17e}\u{178}";

/// Whether a built-in font can draw `c` through WinAnsiEncoding
fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Map text onto the WinAnsi character set the built-in fonts are encoded with
///
/// Each character maps to exactly one character so wrapped widths hold.
fn to_win_ansi(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            c if is_win_ansi(c) => c,
            '\t' | '\u{2002}'..='\u{200a}' => ' ',
            '\u{2023}' | '\u{25aa}' | '\u{25cf}' | '\u{25e6}' | '\u{2043}' => '\u{2022}',
            '\u{2010}'..='\u{2012}' | '\u{2212}' => '-',
            '\u{2015}' => '\u{2014}',
            '\u{2032}' => '\'',
            '\u{2033}' => '"',
            '\u{2192}' | '\u{279c}' | '\u{27a4}' => '>',
            _ => '?',
        })
        .collect()
}

fn draw_page(layer: &PdfLayerReference, page: &Page, font: &IndirectFontRef) {
    for line in &page.lines {
        // Blank visual lines only advance the cursor
        if line.text.is_empty() {
            continue;
        }
        layer.use_text(
            to_win_ansi(&line.text),
            page.font.size,
            Mm::from(Pt(line.x)),
            Mm::from(Pt(line.y)),
            font,
        );
    }
}

/// Write the layout to `path`, truncating any existing file
pub fn write_pdf(layout: &DocumentLayout, setup: &PageSetup, title: &str, path: &Path) -> Result<(), RenderError> {
    debug!(pages = layout.page_count(), path = %path.display(), "write_pdf: called");

    let width = Mm::from(Pt(setup.width));
    let height = Mm::from(Pt(setup.height));

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");
    let font = doc
        .add_builtin_font(builtin_font(setup.font.typeface))
        .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;

    let mut pages = layout.pages.iter();
    if let Some(page) = pages.next() {
        draw_page(&doc.get_page(first_page).get_layer(first_layer), page, &font);
    }
    for (idx, page) in pages.enumerate() {
        let (page_idx, layer_idx) = doc.add_page(width, height, format!("Page {}", idx + 2));
        draw_page(&doc.get_page(page_idx).get_layer(layer_idx), page, &font);
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;

    debug!("write_pdf: saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::layout_document;

    #[test]
    fn test_write_pdf_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let setup = PageSetup::default();
        let layout = layout_document("Week 1\n- Install Python\n\nWeek 2\n- pandas", &setup);

        write_pdf(&layout, &setup, "Roadmap", &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_write_pdf_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("out.pdf");
        let setup = PageSetup::default();
        let layout = layout_document("text", &setup);

        let result = write_pdf(&layout, &setup, "Roadmap", &path);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_latin_text_passes_through() {
        let text = "Fran\u{e7}ais, Espa\u{f1}ol, M\u{fc}nchen, caf\u{e9} \u{2022} \u{20ac}50";
        assert_eq!(to_win_ansi(text), text);
        assert_eq!(to_win_ansi("- Learn SQL (2 weeks)"), "- Learn SQL (2 weeks)");
    }

    #[test]
    fn test_typographic_punctuation_passes_through() {
        let text = "\u{201c}tips\u{201d} \u{2018}n\u{2019} \u{2013} \u{2014} \u{2026} \u{2122} \u{153}uvre";
        assert_eq!(to_win_ansi(text), text);
    }

    #[test]
    fn test_unencodable_characters_substituted() {
        assert_eq!(to_win_ansi("\u{25cf} Week 1 \u{2212} basics"), "\u{2022} Week 1 - basics");
        assert_eq!(to_win_ansi("SQL \u{2192} pandas"), "SQL > pandas");
        assert_eq!(to_win_ansi("\u{1f680} launch"), "? launch");
        assert_eq!(to_win_ansi("\u{65e5}\u{672c}"), "??");
    }

    #[test]
    fn test_substitution_preserves_length() {
        let text = "\u{25e6} \u{2192} caf\u{e9} \u{2015} \u{1f4da}";
        assert_eq!(to_win_ansi(text).chars().count(), text.chars().count());
    }

    #[test]
    fn test_builtin_font_mapping() {
        assert!(matches!(builtin_font(Typeface::Courier), BuiltinFont::Courier));
        assert!(matches!(builtin_font(Typeface::Helvetica), BuiltinFont::Helvetica));
    }
}
