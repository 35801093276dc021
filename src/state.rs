use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::tmdb::{TmdbClient, TmdbError};
use crate::modules::genre::GenreResolver;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub tmdb: Arc<TmdbClient>,
    pub genres: Arc<GenreResolver>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, TmdbError> {
        let tmdb = Arc::new(
            TmdbClient::builder()
                .base_url(config.tmdb_base_url.clone())
                .api_key(config.tmdb_api_key.clone())
                .language(config.tmdb_language.clone())
                .build()?,
        );
        let genres = Arc::new(GenreResolver::new(Arc::clone(&tmdb)));

        Ok(Self {
            config,
            tmdb,
            genres,
        })
    }
}
