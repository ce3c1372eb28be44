use askgate::errors::{ImageError, ProviderError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid server address {addr}")]
    InvalidAddress { addr: String },
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load default image: {0}")]
    Image(#[from] ImageError),
    #[error("Failed to create provider: {0}")]
    Provider(#[from] ProviderError),
}

/// Anything a handler cannot turn into a relayed upstream body
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal Server Error",
                "details": self.to_string(),
            })),
        )
            .into_response()
    }
}
