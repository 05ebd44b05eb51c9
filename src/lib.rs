//! word-analyzer — dictionary-style word analysis backed by an LLM.
//!
//! A request carries a word and the text it appeared in. The service builds a
//! prompt, asks the configured model for a meaning and a usage note, and parses
//! the free-form reply into an [`AnalysisResult`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod router;
pub mod state;

pub use analysis::{build_prompt, parse_reply, AnalysisResult, ParsedReply};
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use llm::{create_llm_client, LlmBackend, LlmClient, LlmReply};
pub use router::build_router;
pub use state::AppState;
