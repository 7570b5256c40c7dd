//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed message returned to the client for every generation failure
///
/// The client contract relies on this exact string as its fallback text,
/// so provider failures, quota errors, and malformed model output all
/// surface identically.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate itinerary. The AI may be experiencing high traffic.";

/// Application error types
///
/// Failure modes stay distinct internally for logging, but all collapse
/// to the same user-visible 500 response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Provider could not be reached (connect, timeout, transport)
    #[error("Provider unreachable: {0}")]
    ProviderUnreachable(#[from] reqwest::Error),

    /// Provider answered with an error or an unusable response
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider text was not a valid itinerary after fence-stripping
    #[error("Invalid provider output: {0}")]
    InvalidOutput(String),
}

/// Error response body returned to the client
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-visible error message
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    ///
    /// Every failure collapses to 500 at the service boundary.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get error kind string for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::ProviderUnreachable(_) => "provider_unreachable",
            AppError::Provider(_) => "provider_error",
            AppError::InvalidOutput(_) => "invalid_output",
        }
    }

    /// Convert to the uniform client-facing error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidOutput(err.to_string())
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full detail stays server-side; the client sees the fixed message
        tracing::error!("Itinerary generation failed ({}): {}", self.kind(), self);

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
