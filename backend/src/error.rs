//! Error handling for the Calorix APIs
//!
//! Client input problems map to 400, missing upstream collaborators to 500.
//! Enrichment-source failures (network, parse, missing fields) never become
//! responses at all; the orchestrator absorbs them into fallback values.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client input errors
    #[error("{0}")]
    Validation(String),

    // Upstream unavailability
    #[error("Model not loaded. Check server logs.")]
    ModelUnavailable,

    // External service errors (absorbed by callers, not surfaced over HTTP)
    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Inference service error: {0}")]
    Inference(String),

    #[error("Recommender error: {0}")]
    Recommender(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TextGeneration(_) | AppError::Recommender(_) => StatusCode::BAD_GATEWAY,
            AppError::ModelUnavailable
            | AppError::Inference(_)
            | AppError::Internal(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
