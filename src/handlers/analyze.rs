//! Word analysis handler.
//!
//! POST /api/analyze-word — `{word, text}` in, `{result: {meaning, context}}` out.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn, Instrument};

use crate::analysis::{build_prompt, parse_reply, AnalysisResult};
use crate::error::AppError;
use crate::llm::LlmClient;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub word: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
}

pub async fn analyze_word(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let span = tracing::info_span!("analyze_word", request_id = %uuid::Uuid::new_v4());

    let result = analyze(state.llm.as_ref(), &request.word, &request.text)
        .instrument(span)
        .await
        .map_err(|e| {
            warn!("LLM invocation failed: {e:#}");
            AppError::from(e)
        })?;

    Ok(Json(AnalyzeResponse { result }))
}

/// Prompt the model for `word` in `text` and parse its reply.
///
/// Only the model call can fail. A reply in an unexpected shape still yields a
/// result, see [`parse_reply`].
pub async fn analyze(llm: &dyn LlmClient, word: &str, text: &str) -> anyhow::Result<AnalysisResult> {
    info!(
        provider = llm.provider_name(),
        model = llm.model_name(),
        word_len = word.chars().count(),
        text_len = text.chars().count(),
        "Analyzing word"
    );

    let prompt = build_prompt(word, text);
    let reply = llm.invoke(&prompt).await?;

    let parsed = parse_reply(&reply.content);
    if parsed.is_fallback() {
        debug!("Reply did not match the meaning/context format, using fallback");
    } else {
        debug!("Reply parsed into meaning and context");
    }
    Ok(parsed.into_result())
}
