//! Backend Selection
//!
//! Enum for selecting between LLM providers (Gemini, OpenAI, Anthropic).

use std::str::FromStr;

/// LLM backend provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmBackend {
    /// Google Gemini (default)
    #[default]
    Gemini,
    /// OpenAI GPT
    OpenAi,
    /// Anthropic Claude
    Anthropic,
}

impl LlmBackend {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            LlmBackend::Gemini => "Gemini",
            LlmBackend::OpenAi => "OpenAI",
            LlmBackend::Anthropic => "Anthropic",
        }
    }

    /// Environment variables holding the API key, in lookup order
    pub fn api_key_vars(&self) -> &'static [&'static str] {
        match self {
            LlmBackend::Gemini => &["GOOGLE_API_KEY", "GEMINI_API_KEY"],
            LlmBackend::OpenAi => &["OPENAI_API_KEY"],
            LlmBackend::Anthropic => &["ANTHROPIC_API_KEY"],
        }
    }

    /// Environment variable overriding the model id
    pub fn model_var(&self) -> &'static str {
        match self {
            LlmBackend::Gemini => "GEMINI_MODEL",
            LlmBackend::OpenAi => "OPENAI_MODEL",
            LlmBackend::Anthropic => "ANTHROPIC_MODEL",
        }
    }

    /// Model used when no override is configured
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmBackend::Gemini => super::gemini_client::DEFAULT_MODEL,
            LlmBackend::OpenAi => super::openai_client::DEFAULT_MODEL,
            LlmBackend::Anthropic => super::anthropic_client::DEFAULT_MODEL,
        }
    }
}

/// Error type for parsing LlmBackend
#[derive(Debug)]
pub struct ParseBackendError(String);

impl std::fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for LlmBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmBackend::Gemini),
            "openai" | "gpt" => Ok(LlmBackend::OpenAi),
            "anthropic" | "claude" => Ok(LlmBackend::Anthropic),
            other => Err(ParseBackendError(format!(
                "Unknown LLM_BACKEND '{}'. Valid values: gemini, google, openai, gpt, anthropic, claude",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LlmBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
