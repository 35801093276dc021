//! TMDB API response types and discover parameters.

use serde::Deserialize;

/// Sort order requested from `discover/movie`.
pub const SORT_POPULARITY_DESC: &str = "popularity.desc";

// --- Genres ---

/// Response from `genre/movie/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenreListResponse {
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// A single genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// TMDB genre ID.
    pub id: u32,
    /// Localized display name, e.g. "Science Fiction".
    pub name: String,
}

// --- Discover ---

/// Response from `discover/movie`.
///
/// Results stay as raw JSON so that only the entries a caller keeps are
/// decoded into [`TmdbDiscoverMovie`].
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbDiscoverResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

/// The fields of a discover result that the service exposes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TmdbDiscoverMovie {
    pub title: String,
    /// Release date as sent by TMDB (usually YYYY-MM-DD, may be empty).
    /// A `null` date is rejected rather than defaulted.
    pub release_date: String,
    pub vote_average: f64,
    pub overview: String,
}

/// Query parameters for `discover/movie`.
///
/// Sort order, adult/video exclusion and the page are fixed; only the genre
/// and year filters vary per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverParams {
    pub with_genres: Option<u32>,
    pub year: Option<i64>,
}

impl DiscoverParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_genres(mut self, genre_id: u32) -> Self {
        self.with_genres = Some(genre_id);
        self
    }

    #[must_use]
    pub const fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    /// Builds the query pairs, without the API key and language.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("sort_by", SORT_POPULARITY_DESC.to_string()),
            ("include_adult", "false".to_string()),
            ("include_video", "false".to_string()),
            ("page", "1".to_string()),
        ];
        if let Some(genre_id) = self.with_genres {
            query.push(("with_genres", genre_id.to_string()));
        }
        if let Some(year) = self.year {
            query.push(("year", year.to_string()));
        }
        query
    }
}
