//! LLM providers behind the [`LlmClient`] trait.

pub mod anthropic_client;
pub mod backend;
pub mod client_factory;
pub mod gemini_client;
pub mod llm_client;
pub mod openai_client;

pub use backend::LlmBackend;
pub use client_factory::create_llm_client;
pub use llm_client::{LlmClient, LlmReply};
