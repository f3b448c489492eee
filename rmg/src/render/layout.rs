//! Page layout
//!
//! Splits text into hard lines, soft-wraps them by character count and places
//! the resulting visual lines top-to-bottom on fixed-size pages. Coordinates
//! are PDF points with the origin at the bottom-left corner.

use serde::{Deserialize, Serialize};
use textwrap::{Options, WrapAlgorithm};

use crate::config::RenderConfig;

/// A4 width in points
pub const A4_WIDTH_PT: f32 = 595.2756;

/// A4 height in points
pub const A4_HEIGHT_PT: f32 = 841.8898;

/// Built-in PDF typefaces usable without embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Typeface {
    #[default]
    Courier,
    Helvetica,
}

/// Font applied to every line of a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub typeface: Typeface,
    pub size: f32,
}

/// Page geometry and text metrics
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub left_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub line_height: f32,
    pub wrap_width: usize,
    pub font: FontSpec,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for PageSetup {
    fn from(config: &RenderConfig) -> Self {
        Self {
            width: A4_WIDTH_PT,
            height: A4_HEIGHT_PT,
            left_margin: config.left_margin,
            top_margin: config.top_margin,
            bottom_margin: config.bottom_margin,
            line_height: config.line_height,
            wrap_width: config.wrap_width.max(1),
            font: FontSpec {
                typeface: config.font,
                size: config.font_size,
            },
        }
    }
}

impl PageSetup {
    /// Baseline of the first line on each page
    pub fn start_y(&self) -> f32 {
        self.height - self.top_margin
    }

    /// How many visual lines fit on one page
    pub fn lines_per_page(&self) -> usize {
        if self.line_height <= 0.0 || self.start_y() < self.bottom_margin {
            return 1;
        }
        ((self.start_y() - self.bottom_margin) / self.line_height).floor() as usize + 1
    }
}

/// A visual line with its position on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// One page of placed lines
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub font: FontSpec,
    pub lines: Vec<PlacedLine>,
}

impl Page {
    fn new(font: FontSpec) -> Self {
        Self { font, lines: Vec::new() }
    }
}

/// The laid-out document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Tab stops used when expanding tabs
pub const TAB_SIZE: usize = 8;

/// Replace tabs with spaces up to the next tab stop
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_SIZE - column % TAB_SIZE;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

/// Soft-wrap one hard line into visual lines
///
/// Greedy wrapping at `width` characters, where every character counts as one
/// column regardless of its display width. Tabs are expanded first. Words
/// longer than the width are broken. An empty or blank line yields a single
/// empty visual line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let line = expand_tabs(line);
    let options = Options::new(width.max(1)).wrap_algorithm(WrapAlgorithm::FirstFit);
    let wrapped: Vec<String> = textwrap::wrap(&line, options)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();

    if wrapped.is_empty() { vec![String::new()] } else { wrapped }
}

/// Split text into hard lines and wrap each into visual lines
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line.strip_suffix('\r').unwrap_or(line), width))
        .collect()
}

/// Lay out text onto pages
///
/// Before each visual line is placed, a new page starts if the cursor has
/// dropped below the bottom margin. Every page carries the same font.
pub fn layout_document(text: &str, setup: &PageSetup) -> DocumentLayout {
    let start_y = setup.start_y();
    let mut pages = Vec::new();
    let mut current = Page::new(setup.font);
    let mut y = start_y;

    for text in wrap_text(text, setup.wrap_width) {
        if y < setup.bottom_margin && !current.lines.is_empty() {
            pages.push(std::mem::replace(&mut current, Page::new(setup.font)));
            y = start_y;
        }
        current.lines.push(PlacedLine {
            text,
            x: setup.left_margin,
            y,
        });
        y -= setup.line_height;
    }

    pages.push(current);
    DocumentLayout { pages }
}
