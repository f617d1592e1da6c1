use crate::handler::env::EnvError;
use reqwest;
use serde_json;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(Box<dyn std::error::Error + Send + Sync>),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Environment error: {0}")]
    EnvError(#[from] EnvError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestFailed(Box::new(err))
    }
}
