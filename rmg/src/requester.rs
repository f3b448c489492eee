//! Roadmap requester
//!
//! Turns the three roadmap fields into a single-turn chat completion and
//! returns the model's text. Failures are typed internally and collapsed to a
//! fixed user-facing message at the boundary.

use std::sync::Arc;

use eyre::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, LlmConfig};
use crate::domain::{RoadmapRequest, SkillLevel};
use crate::llm::{self, CompletionRequest, LlmClient, LlmError, Message};
use crate::prompts::{PromptContext, PromptLoader};

/// Shown when a field is missing
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";

/// Shown when no API key is configured
pub const MSG_MISSING_CREDENTIAL: &str =
    "Inference API key is missing. Please set the API key environment variable before generating a roadmap.";

/// Shown for any backend failure
pub const MSG_UNAVAILABLE: &str = "Unable to generate roadmap at the moment. Please try again later.";

/// Why a roadmap could not be generated
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("One or more roadmap fields are empty")]
    MissingFields,

    #[error("No API key configured")]
    MissingCredential,

    #[error("Prompt rendering failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Model returned no content")]
    EmptyResponse,
}

impl RoadmapError {
    /// The fixed message shown to the user for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            RoadmapError::MissingFields => MSG_MISSING_FIELDS,
            RoadmapError::MissingCredential => MSG_MISSING_CREDENTIAL,
            RoadmapError::Prompt(_) | RoadmapError::Llm(_) | RoadmapError::EmptyResponse => MSG_UNAVAILABLE,
        }
    }
}

/// Sampling parameters for roadmap requests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 900,
        }
    }
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Generates roadmaps through an LLM backend
///
/// The backend is `None` when no credential was configured.
pub struct RoadmapRequester {
    llm: Option<Arc<dyn LlmClient>>,
    prompts: PromptLoader,
    settings: GenerationSettings,
}

impl RoadmapRequester {
    pub fn new(llm: Option<Arc<dyn LlmClient>>, prompts: PromptLoader, settings: GenerationSettings) -> Self {
        debug!(has_backend = llm.is_some(), ?settings, "RoadmapRequester::new: called");
        Self { llm, prompts, settings }
    }

    /// Build a requester from config, resolving the API key from the environment
    pub fn from_config(config: &Config) -> Result<Self> {
        let prompts = PromptLoader::load(config.prompt.template_path.as_deref()).context("Failed to load prompt")?;

        let llm = match config.llm.resolve() {
            Some(resolved) => Some(llm::create_client(&resolved).context("Failed to create LLM client")?),
            None => {
                info!(env = %config.llm.api_key_env, "No API key configured, roadmap generation disabled");
                None
            }
        };

        Ok(Self::new(llm, prompts, GenerationSettings::from(&config.llm)))
    }

    /// Whether a backend is available
    pub fn has_credential(&self) -> bool {
        self.llm.is_some()
    }

    /// Generate a roadmap, returning either the model's text or a fixed message
    pub async fn generate(&self, domain: &str, level: Option<SkillLevel>, duration: &str) -> String {
        let request = RoadmapRequest::new(domain, level, duration);
        match self.try_generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                match &e {
                    RoadmapError::MissingFields | RoadmapError::MissingCredential => {
                        debug!(error = %e, "generate: rejected")
                    }
                    _ => warn!(error = %e, "generate: roadmap request failed"),
                }
                e.user_message().to_string()
            }
        }
    }

    /// Generate a roadmap, keeping the failure cause
    pub async fn try_generate(&self, request: &RoadmapRequest) -> Result<String, RoadmapError> {
        debug!(?request, "try_generate: called");

        let Some(level) = request.level.filter(|_| request.is_complete()) else {
            return Err(RoadmapError::MissingFields);
        };

        let Some(llm) = &self.llm else {
            return Err(RoadmapError::MissingCredential);
        };

        let prompt = self
            .prompts
            .render(&PromptContext {
                domain: request.domain.clone(),
                level: level.to_string(),
                duration: request.duration.clone(),
            })
            .map_err(|e| RoadmapError::Prompt(e.to_string()))?;

        let completion = CompletionRequest {
            messages: vec![Message::user(prompt)],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let response = llm.complete(completion).await?;
        info!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            total_tokens = response.usage.total(),
            stop_reason = ?response.stop_reason,
            "try_generate: roadmap received"
        );

        response.content.ok_or(RoadmapError::EmptyResponse)
    }
}
