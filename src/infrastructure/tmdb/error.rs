use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    /// TMDB answered with a non-success status.
    #[error("TMDB API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to decode TMDB response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid TMDB URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl TmdbError {
    /// Upstream status code, when TMDB itself rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            TmdbError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
