//! Roadmap configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::render::Typeface;

/// Main roadmap configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// PDF rendering configuration
    pub render: RenderConfig,

    /// Prompt template configuration
    pub prompt: PromptConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .roadmap.yml
        let local_config = PathBuf::from(".roadmap.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/roadmap/roadmap.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("roadmap").join("roadmap.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name ("groq" or "openai", both speak the chat completions API)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in milliseconds (client default when unset)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            api_key_env: "AI_ROADMAP_KEY".to_string(),
            base_url: "https://api.groq.com/openai".to_string(),
            max_tokens: 900,
            temperature: 0.7,
            timeout_ms: None,
        }
    }
}

impl LlmConfig {
    /// Resolve the config against the process environment
    ///
    /// Returns `None` when the API key variable is unset or empty.
    pub fn resolve(&self) -> Option<ResolvedLlmConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve the config using a custom variable lookup
    pub fn resolve_with<F>(&self, lookup: F) -> Option<ResolvedLlmConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(&self.api_key_env).filter(|key| !key.trim().is_empty())?;

        Some(ResolvedLlmConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            max_tokens: self.max_tokens,
            timeout: self.timeout_ms.map(Duration::from_millis),
        })
    }
}

/// LLM configuration with the credential resolved
#[derive(Clone)]
pub struct ResolvedLlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    /// Upper bound on tokens the client will request
    pub max_tokens: u32,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ResolvedLlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedLlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// PDF rendering configuration
///
/// Units are PDF points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output file, overwritten on every render
    #[serde(rename = "output-path")]
    pub output_path: PathBuf,

    /// Built-in typeface
    pub font: Typeface,

    #[serde(rename = "font-size")]
    pub font_size: f32,

    #[serde(rename = "line-height")]
    pub line_height: f32,

    #[serde(rename = "left-margin")]
    pub left_margin: f32,

    /// Distance from the top edge to the first baseline
    #[serde(rename = "top-margin")]
    pub top_margin: f32,

    /// A new page starts once the cursor drops below this
    #[serde(rename = "bottom-margin")]
    pub bottom_margin: f32,

    /// Soft wrap width in characters
    #[serde(rename = "wrap-width")]
    pub wrap_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("AI_Learning_Roadmap.pdf"),
            font: Typeface::Courier,
            font_size: 10.0,
            line_height: 14.0,
            left_margin: 40.0,
            top_margin: 50.0,
            bottom_margin: 50.0,
            wrap_width: 90,
        }
    }
}

/// Prompt template configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Handlebars file overriding the embedded roadmap prompt
    #[serde(rename = "template-path")]
    pub template_path: Option<PathBuf>,
}
