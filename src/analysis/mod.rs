//! Prompt construction and reply parsing.
//!
//! These are the only pieces with real logic; everything around them is HTTP
//! and provider plumbing.

pub mod parser;
pub mod prompt;

pub use parser::{parse_reply, AnalysisResult, ParsedReply, FALLBACK_CONTEXT};
pub use prompt::build_prompt;
