//! API error handling
//!
//! Maps the core error taxonomy onto HTTP statuses and the dashboard's
//! `{error, message?, code?}` body shape.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use moodcast_core::ProviderError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the dashboard endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("OpenWeatherMap API key is not configured")]
    MissingCredential,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Error body: `{error, message?, code?}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The upstream vendor's status code, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse { error: msg, message: None, code: None },
            ),
            Self::MissingCredential => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "OpenWeatherMap API key is not configured".to_string(),
                    message: None,
                    code: None,
                },
            ),
            Self::Provider(ProviderError::Upstream { status, message }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "OpenWeatherMap API error".to_string(),
                    message: Some(message),
                    code: Some(status),
                },
            ),
            Self::Provider(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some(err.to_string()),
                    code: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
