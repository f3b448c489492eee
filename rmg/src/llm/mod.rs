//! LLM client module
//!
//! Provides the client trait, the chat completions implementation and the
//! provider factory.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, TokenUsage};

use crate::config::ResolvedLlmConfig;

/// Create an LLM client for the resolved provider
///
/// Groq and OpenAI both speak the chat completions protocol, so they share
/// one implementation.
pub fn create_client(config: &ResolvedLlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "groq" | "openai" => {
            debug!("create_client: creating chat completions client");
            Ok(Arc::new(OpenAIClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::UnknownProvider(other.to_string()))
        }
    }
}
