use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    UnknownBackend(String),

    #[error("{var} must be set for the {backend} backend")]
    MissingApiKey {
        backend: &'static str,
        var: &'static str,
    },

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("failed to load .env: {0}")]
    DotEnv(String),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body missing, malformed, or of the wrong shape.
    #[error("invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },

    /// The model call failed; the caller only ever sees a 500.
    #[error("llm invocation failed: {0}")]
    Llm(#[from] anyhow::Error),
}

impl AppError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { status, .. } => *status,
            Self::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field of the response body.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidRequest { message, .. } => message.clone(),
            Self::Llm(e) => format!("{e:#}"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.http_status(),
            Json(ErrorBody {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}
