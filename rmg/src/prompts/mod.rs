//! Prompt templates
//!
//! The roadmap instruction is a Handlebars template, embedded by default and
//! overridable from config.

pub mod embedded;
mod loader;

pub use loader::{PromptContext, PromptLoader};
