use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::infrastructure::tmdb::types::TmdbDiscoverMovie;

// --- DISCOVERY ---

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieFilterQuery {
    /// The genre to filter for.
    #[validate(length(min = 3, max = 50, message = "Genre must be between 3 and 50 characters"))]
    #[param(min_length = 3, max_length = 50)]
    pub genre: Option<String>,
    /// The year to filter for.
    pub year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieSummary {
    pub title: String,
    pub release_date: String,
    pub vote_average: f64,
    pub overview: String,
}

impl From<TmdbDiscoverMovie> for MovieSummary {
    fn from(m: TmdbDiscoverMovie) -> Self {
        Self {
            title: m.title,
            release_date: m.release_date,
            vote_average: m.vote_average,
            overview: m.overview,
        }
    }
}

// --- ECHO ---

/// Client-submitted movie record. Not related to [`MovieSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub title: String,
    pub year: i64,
    pub genre: String,
    pub overview: String,
    pub vote_average: f64,
}
