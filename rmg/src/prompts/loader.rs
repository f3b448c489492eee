//! Prompt Loader
//!
//! Loads the roadmap template from an override file or falls back to the
//! embedded default.

use std::path::Path;

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use super::embedded;

/// Context for rendering the roadmap template
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub domain: String,
    pub level: String,
    pub duration: String,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// Template source
    template: String,
}

impl PromptLoader {
    /// Create a loader that uses the embedded roadmap prompt
    pub fn embedded() -> Self {
        Self::with_template(embedded::ROADMAP.to_string())
    }

    /// Create a loader from an override file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading prompt from override: {:?}", path);
        let template = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read prompt template {}: {}", path.display(), e))?;
        Ok(Self::with_template(template))
    }

    /// Create a loader from an optional override, falling back to embedded
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("Using embedded prompt: roadmap");
                Ok(Self::embedded())
            }
        }
    }

    fn with_template(template: String) -> Self {
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs, template }
    }

    /// Render the roadmap template with the given context
    pub fn render(&self, context: &PromptContext) -> Result<String> {
        info!(
            "Rendering roadmap prompt (domain: {}, level: {})",
            context.domain, context.level
        );

        self.hbs
            .render_template(&self.template, context)
            .map_err(|e| eyre!("Failed to render roadmap template: {}", e))
    }
}
