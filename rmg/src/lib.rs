//! Roadmap - learning roadmap generator
//!
//! Asks a chat completions model for a learning plan built from three fields
//! (domain, skill level, time budget) and renders the plan text into a
//! paginated A4 PDF.
//!
//! # Modules
//!
//! - [`requester`] - Builds the prompt and collapses failures to fixed messages
//! - [`llm`] - LLM client trait and chat completions implementation
//! - [`prompts`] - Embedded prompt template and override loading
//! - [`render`] - Page layout and PDF output
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//! - [`interactive`] - Readline-driven session

pub mod cli;
pub mod config;
pub mod domain;
pub mod interactive;
pub mod llm;
pub mod prompts;
pub mod render;
pub mod requester;

// Re-export commonly used types
pub use config::{Config, LlmConfig, RenderConfig};
pub use domain::{RoadmapRequest, SkillLevel};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError};
pub use render::{DocumentLayout, DocumentRenderer, PageSetup, RenderError};
pub use requester::{
    GenerationSettings, MSG_MISSING_CREDENTIAL, MSG_MISSING_FIELDS, MSG_UNAVAILABLE, RoadmapError, RoadmapRequester,
};
