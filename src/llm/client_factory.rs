//! Client Factory
//!
//! Builds the configured provider client once at startup.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::anthropic_client::AnthropicClient;
use super::backend::LlmBackend;
use super::gemini_client::GeminiClient;
use super::llm_client::LlmClient;
use super::openai_client::OpenAiClient;
use crate::config::AppConfig;

/// Create the LLM client selected by `config.backend`
pub fn create_llm_client(config: &AppConfig) -> Result<Arc<dyn LlmClient>> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.llm_timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("failed to build HTTP client")?;

    let api_key = config.api_key.clone();
    let model = config.model.as_str();
    let base_url = config.base_url.as_deref();

    let client: Arc<dyn LlmClient> = match config.backend {
        LlmBackend::Gemini => {
            let mut client = GeminiClient::new(api_key, model).with_http_client(http);
            if let Some(url) = base_url {
                client = client.with_base_url(url);
            }
            Arc::new(client)
        }
        LlmBackend::OpenAi => {
            let mut client = OpenAiClient::new(api_key, model).with_http_client(http);
            if let Some(url) = base_url {
                client = client.with_base_url(url);
            }
            Arc::new(client)
        }
        LlmBackend::Anthropic => {
            let mut client = AnthropicClient::new(api_key, model).with_http_client(http);
            if let Some(url) = base_url {
                client = client.with_base_url(url);
            }
            Arc::new(client)
        }
    };

    tracing::info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "LLM client ready"
    );
    Ok(client)
}
