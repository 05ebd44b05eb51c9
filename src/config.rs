//! Process configuration.
//!
//! Reads config from env vars (after loading `.env` if present):
//!   LLM_BACKEND              — gemini | openai | anthropic (default: gemini)
//!   GOOGLE_API_KEY           — Gemini key (GEMINI_API_KEY also accepted)
//!   OPENAI_API_KEY           — OpenAI key
//!   ANTHROPIC_API_KEY        — Anthropic key
//!   GEMINI_MODEL / OPENAI_MODEL / ANTHROPIC_MODEL — model override
//!   LLM_BASE_URL             — provider endpoint override
//!   LLM_TIMEOUT_SECS         — HTTP timeout for provider calls (default: none)
//!   WORD_ANALYZER_BIND_ADDR  — listen address (default: 127.0.0.1:8000)

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::llm::LlmBackend;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Configuration built once at startup and handed to the router.
#[derive(Clone)]
pub struct AppConfig {
    pub backend: LlmBackend,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub llm_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotEnv(e.to_string()));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("LLM_BACKEND") {
            Some(value) => value
                .parse::<LlmBackend>()
                .map_err(|e| ConfigError::UnknownBackend(e.to_string()))?,
            None => LlmBackend::default(),
        };

        let api_key = backend
            .api_key_vars()
            .iter()
            .find_map(|var| get(*var))
            .ok_or(ConfigError::MissingApiKey {
                backend: backend.name(),
                var: backend.api_key_vars()[0],
            })?;

        let model = get(backend.model_var()).unwrap_or_else(|| backend.default_model().to_string());

        let llm_timeout = match get("LLM_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: "LLM_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let bind_value = get("WORD_ANALYZER_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "WORD_ANALYZER_BIND_ADDR",
                value: bind_value.clone(),
            })?;

        Ok(Self {
            backend,
            api_key,
            model,
            base_url: get("LLM_BASE_URL"),
            llm_timeout,
            bind_addr,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("backend", &self.backend)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("llm_timeout", &self.llm_timeout)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}
