use axum::http::StatusCode;
use thiserror::Error;

use crate::common::response::ApiError;
use crate::infrastructure::tmdb::TmdbError;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Genre '{0}' not found.")]
    GenreNotFound(String),
    #[error(transparent)]
    Upstream(#[from] TmdbError),
    #[error("unexpected movie record from TMDB: {0}")]
    Projection(#[source] serde_json::Error),
}

impl DiscoveryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DiscoveryError::GenreNotFound(_) => StatusCode::NOT_FOUND,
            DiscoveryError::Upstream(e) => e
                .status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            DiscoveryError::Projection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DiscoveryError> for ApiError {
    fn from(e: DiscoveryError) -> Self {
        let status = e.status_code();
        // Transport and decode failures stay opaque to clients.
        let message = match &e {
            DiscoveryError::GenreNotFound(_) => e.to_string(),
            DiscoveryError::Upstream(inner) if inner.status().is_some() => e.to_string(),
            _ => "Internal server error".to_string(),
        };
        ApiError(message, status)
    }
}
