//! LLM Client Trait
//!
//! Unified interface for the text-completion providers (Gemini, OpenAI, Anthropic).

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reply from a single completion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmReply {
    /// Raw text produced by the model
    pub content: String,
}

impl LlmReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Text-completion service used by the analyze handler
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and wait for the complete reply
    async fn invoke(&self, prompt: &str) -> Result<LlmReply>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}
