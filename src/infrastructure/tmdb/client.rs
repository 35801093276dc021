//! `TmdbClient` - thin TMDB v3 client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::error::TmdbError;
use super::types::{DiscoverParams, TmdbDiscoverResponse, TmdbGenre, TmdbGenreListResponse};
use crate::config::settings::{DEFAULT_TMDB_BASE_URL, DEFAULT_TMDB_LANGUAGE};

/// TMDB API client authenticated with a v3 API key.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
    language: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug, Default)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    language: Option<String>,
}

impl TmdbClientBuilder {
    /// Overrides the base URL (wiremock in tests). Must end with `/`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the response language (default: `en-US`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient, TmdbError> {
        let api_key = self.api_key.ok_or(TmdbError::MissingField("api_key"))?;
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_TMDB_BASE_URL)?,
        };

        let http_client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key,
            language: self
                .language
                .unwrap_or_else(|| DEFAULT_TMDB_LANGUAGE.to_string()),
        })
    }
}

impl TmdbClient {
    #[must_use]
    pub fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::default()
    }

    /// Lists every movie genre known to TMDB.
    #[instrument(skip_all)]
    pub async fn movie_genres(&self) -> Result<Vec<TmdbGenre>, TmdbError> {
        let response: TmdbGenreListResponse = self.get_json("genre/movie/list", &[]).await?;
        Ok(response.genres)
    }

    /// Runs a single-page `discover/movie` query.
    #[instrument(skip_all, fields(with_genres = ?params.with_genres, year = ?params.year))]
    pub async fn discover_movies(
        &self,
        params: &DiscoverParams,
    ) -> Result<TmdbDiscoverResponse, TmdbError> {
        self.get_json("discover/movie", &params.to_query()).await
    }

    /// Sends a GET request carrying the API key and language, then decodes
    /// the JSON body. Non-2xx answers become [`TmdbError::Status`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = self.base_url.join(path)?;

        let mut query: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        query.extend(extra.iter().map(|(k, v)| (*k, v.as_str())));

        debug!(%url, "TMDB API request");

        let response = self.http_client.get(url).query(&query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            return Err(TmdbError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
