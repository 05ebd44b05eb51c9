use std::sync::Arc;

use crate::llm::LlmClient;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}
