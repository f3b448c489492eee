//! Document renderer
//!
//! Paginates roadmap text into an A4 PDF at a single fixed output path. The
//! file is overwritten on every render, so concurrent renders race on it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RenderConfig;

pub mod layout;
mod pdf;

pub use layout::{DocumentLayout, FontSpec, Page, PageSetup, PlacedLine, Typeface, layout_document, wrap_line, wrap_text};

/// Document title embedded in the PDF metadata
const DOCUMENT_TITLE: &str = "AI Learning Roadmap";

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Nothing to render")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Renders text to a paginated PDF
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    setup: PageSetup,
    output_path: PathBuf,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl DocumentRenderer {
    pub fn new(setup: PageSetup, output_path: impl Into<PathBuf>) -> Self {
        Self {
            setup,
            output_path: output_path.into(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(PageSetup::from(config), config.output_path.clone())
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    /// Lay out text without writing anything
    pub fn layout(&self, text: &str) -> DocumentLayout {
        layout_document(text, &self.setup)
    }

    /// Render text, returning the output path or `None` on empty input or failure
    pub fn render(&self, text: &str) -> Option<PathBuf> {
        match self.try_render(text) {
            Ok(path) => Some(path),
            Err(RenderError::EmptyInput) => {
                debug!("render: empty input, nothing written");
                None
            }
            Err(e) => {
                warn!(error = %e, path = %self.output_path.display(), "render: failed");
                None
            }
        }
    }

    /// Render text, keeping the failure cause
    pub fn try_render(&self, text: &str) -> Result<PathBuf, RenderError> {
        debug!(text_len = text.len(), "try_render: called");
        if text.is_empty() {
            return Err(RenderError::EmptyInput);
        }

        let layout = self.layout(text);

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        pdf::write_pdf(&layout, &self.setup, DOCUMENT_TITLE, &self.output_path)?;

        info!(
            pages = layout.page_count(),
            lines = layout.line_count(),
            path = %self.output_path.display(),
            "try_render: document written"
        );
        Ok(self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_in(dir: &tempfile::TempDir) -> DocumentRenderer {
        DocumentRenderer::new(PageSetup::default(), dir.path().join("AI_Learning_Roadmap.pdf"))
    }

    #[test]
    fn test_empty_input_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_in(&dir);

        assert!(renderer.render("").is_none());
        assert!(matches!(renderer.try_render(""), Err(RenderError::EmptyInput)));
        assert!(!renderer.output_path().exists());
    }

    #[test]
    fn test_render_returns_fixed_path() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_in(&dir);

        let path = renderer.render("Phase 1\n- Learn SQL").unwrap();
        assert_eq!(path, dir.path().join("AI_Learning_Roadmap.pdf"));
        assert!(path.exists());
    }

    #[test]
    fn test_render_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_in(&dir);
        let long = (0..200).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");

        let first = renderer.render(&long).unwrap();
        let long_size = std::fs::metadata(&first).unwrap().len();

        let second = renderer.render("short").unwrap();
        let short_size = std::fs::metadata(&second).unwrap().len();

        assert_eq!(first, second);
        assert!(short_size < long_size);
    }

    #[test]
    fn test_same_text_same_layout() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_in(&dir);
        let text = "Week 1-2: Python\nWeek 3-4: Statistics";

        renderer.render(text).unwrap();
        renderer.render(text).unwrap();

        assert_eq!(renderer.layout(text), renderer.layout(text));
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = DocumentRenderer::new(PageSetup::default(), dir.path().join("exports").join("plan.pdf"));

        let path = renderer.render("text").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        // The output path is an existing directory
        let renderer = DocumentRenderer::new(PageSetup::default(), dir.path());

        assert!(renderer.render("text").is_none());
    }

    #[test]
    fn test_from_config() {
        let config = RenderConfig {
            output_path: PathBuf::from("custom.pdf"),
            wrap_width: 60,
            ..Default::default()
        };
        let renderer = DocumentRenderer::from_config(&config);

        assert_eq!(renderer.output_path(), &PathBuf::from("custom.pdf"));
        assert_eq!(renderer.setup().wrap_width, 60);
    }
}
