use thiserror::Error;
use url::Url;

use crate::config::env::{self, EnvKey};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: Url,
    pub tmdb_language: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Fails when `TMDB_API_KEY` is unset or blank, so a misconfigured
    /// deployment never starts serving requests.
    pub fn new() -> Result<Self, ConfigError> {
        let api_key = require(EnvKey::TmdbApiKey, env::get(EnvKey::TmdbApiKey).ok())?;
        let base_url = env::get_or(EnvKey::TmdbBaseUrl, DEFAULT_TMDB_BASE_URL);

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            tmdb_api_key: api_key,
            tmdb_base_url: parse_base_url(EnvKey::TmdbBaseUrl, &base_url)?,
            tmdb_language: env::get_or(EnvKey::TmdbLanguage, DEFAULT_TMDB_LANGUAGE),
        })
    }
}

fn require(key: EnvKey, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key.as_str())),
    }
}

// Url::join drops the last path segment unless the base ends with '/'.
fn parse_base_url(key: EnvKey, raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
        key: key.as_str(),
        source,
    })
}
