//! HTTP-facing application errors.
//!
//! Every failure a handler can produce ends up here. Validation failures carry
//! a client-facing message; downstream failures keep their cause for logging
//! and answer with a fixed generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::core::storage::StorageError;
use crate::core::tts::SynthesisError;

/// Message returned to clients for any synthesis or storage failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate speech";

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),
    #[error("Speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("Audio storage failed: {0}")]
    Storage(#[from] StorageError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Synthesis(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status code the provider answered with, for synthesis failures.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            Self::Synthesis(err) => err.provider_status(),
            _ => None,
        }
    }

    /// Message safe to show to clients.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Synthesis(_) | Self::Storage(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                error = %self,
                provider_status = ?self.provider_status(),
                "Request failed"
            );
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}
