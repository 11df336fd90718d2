#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ats::AtsError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire body is always a generic `{"error": "..."}`; the distinction
/// between failure kinds lives in the server-side logs only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Ats(#[from] AtsError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected submission: {msg}");
                (StatusCode::BAD_REQUEST, "Invalid form submission")
            }
            AppError::Ats(e) => {
                // Each upstream failure kind gets its own log line; the
                // client sees one generic message for all of them.
                match e {
                    AtsError::Timeout => tracing::error!("ATS call timed out"),
                    AtsError::Connect(msg) => tracing::error!("ATS unreachable: {msg}"),
                    AtsError::Http(err) => tracing::error!("ATS transport error: {err}"),
                    AtsError::Auth { status } => {
                        tracing::error!("ATS authentication failed (status {status})")
                    }
                    AtsError::Api { status, message } => {
                        tracing::error!("ATS rejected the submission (status {status}): {message}")
                    }
                    AtsError::UnexpectedResponse(msg) => {
                        tracing::error!("Unexpected upstream response: {msg}")
                    }
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit application",
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit application",
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
