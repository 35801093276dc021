use super::dto::{MovieFilterQuery, MovieSummary};
use super::error::DiscoveryError;
use crate::infrastructure::tmdb::types::{DiscoverParams, TmdbDiscoverMovie};
use crate::state::AppState;
use tracing::debug;

/// Upper bound on the number of movies returned per discovery request.
pub const MAX_RESULTS: usize = 5;

pub struct MovieService;

impl MovieService {
    /// Translates the user-facing filters into a TMDB discover query and
    /// returns the top results, in TMDB's popularity order.
    pub async fn discover(
        state: AppState,
        query: MovieFilterQuery,
    ) -> Result<Vec<MovieSummary>, DiscoveryError> {
        let mut params = DiscoverParams::new();

        if let Some(genre) = query.genre {
            let genre = genre.to_lowercase();
            let genre_id = state
                .genres
                .resolve(&genre)
                .await?
                .ok_or_else(|| DiscoveryError::GenreNotFound(genre.clone()))?;
            debug!(%genre, genre_id, "Resolved genre");
            params = params.with_genres(genre_id);
        }
        if let Some(year) = query.year {
            params = params.year(year);
        }

        let response = state.tmdb.discover_movies(&params).await?;
        project(response.results)
    }
}

/// Keeps the first [`MAX_RESULTS`] entries and reduces each to a summary.
/// Entries past the cut are never decoded.
fn project(results: Vec<serde_json::Value>) -> Result<Vec<MovieSummary>, DiscoveryError> {
    results
        .into_iter()
        .take(MAX_RESULTS)
        .map(|raw| {
            serde_json::from_value::<TmdbDiscoverMovie>(raw)
                .map(MovieSummary::from)
                .map_err(DiscoveryError::Projection)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn movie(i: usize) -> Value {
        let vote_average = 5.0 + i as f64 / 10.0;
        json!({
            "id": i,
            "title": format!("Movie {i}"),
            "release_date": format!("2020-01-{:02}", i + 1),
            "vote_average": vote_average,
            "overview": format!("Overview {i}"),
            "adult": false
        })
    }

    fn state_for(server: &MockServer) -> AppState {
        AppState::new(AppConfig {
            server_port: 0,
            tmdb_api_key: "test-key".to_string(),
            tmdb_base_url: format!("{}/3/", server.uri()).parse().unwrap(),
            tmdb_language: "en-US".to_string(),
        })
        .unwrap()
    }

    async fn mount_genres(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/3/genre/movie/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "genres": [{ "id": 35, "name": "Comedy" }, { "id": 18, "name": "Drama" }]
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn project_truncates_and_keeps_order() {
        let results: Vec<Value> = (0..8).map(movie).collect();

        let summaries = project(results).unwrap();

        assert_eq!(summaries.len(), MAX_RESULTS);
        for (i, s) in summaries.iter().enumerate() {
            assert_eq!(s.title, format!("Movie {i}"));
            assert_eq!(s.release_date, format!("2020-01-{:02}", i + 1));
            assert_eq!(s.overview, format!("Overview {i}"));
        }
    }

    #[test]
    fn project_short_list_is_kept_whole() {
        let summaries = project(vec![movie(0), movie(1)]).unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(project(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn project_fails_on_missing_field_in_kept_entry() {
        let mut broken = movie(2);
        broken.as_object_mut().unwrap().remove("release_date");

        let err = project(vec![movie(0), movie(1), broken]).unwrap_err();

        assert!(matches!(err, DiscoveryError::Projection(_)));
    }

    #[test]
    fn project_fails_on_null_release_date() {
        let mut unreleased = movie(0);
        unreleased["release_date"] = Value::Null;

        let err = project(vec![unreleased]).unwrap_err();

        assert!(matches!(err, DiscoveryError::Projection(_)));
    }

    #[test]
    fn project_ignores_entries_past_the_cut() {
        let mut results: Vec<Value> = (0..5).map(movie).collect();
        results.push(json!({ "title": "No other fields" }));

        assert_eq!(project(results).unwrap().len(), 5);
    }

    #[tokio::test]
    async fn discover_with_genre_and_year() {
        let server = MockServer::start().await;
        mount_genres(&server).await;
        let results: Vec<Value> = (0..20).map(movie).collect();
        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .and(query_param("with_genres", "35"))
            .and(query_param("year", "2020"))
            .and(query_param("sort_by", "popularity.desc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "page": 1, "results": results })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let query = MovieFilterQuery {
            genre: Some("Comedy".to_string()),
            year: Some(2020),
        };
        let movies = MovieService::discover(state_for(&server), query).await.unwrap();

        assert_eq!(movies.len(), 5);
        assert_eq!(movies[0].title, "Movie 0");
        assert_eq!(movies[4].title, "Movie 4");
    }

    #[tokio::test]
    async fn discover_without_genre_skips_genre_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/genre/movie/list"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .and(query_param_is_missing("with_genres"))
            .and(query_param("year", "1999"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [movie(0)] })))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server);
        let query = MovieFilterQuery {
            genre: None,
            year: Some(1999),
        };
        let movies = MovieService::discover(state.clone(), query).await.unwrap();

        assert_eq!(movies.len(), 1);
        assert!(!state.genres.is_populated());
    }

    #[tokio::test]
    async fn unknown_genre_is_not_found() {
        let server = MockServer::start().await;
        mount_genres(&server).await;
        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let query = MovieFilterQuery {
            genre: Some("Not-A-Genre".to_string()),
            year: None,
        };
        let err = MovieService::discover(state_for(&server), query)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Genre 'not-a-genre' not found.");
    }

    #[tokio::test]
    async fn upstream_failure_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/discover/movie"))
            .respond_with(ResponseTemplate::new(401).set_body_string("{}"))
            .mount(&server)
            .await;

        let err = MovieService::discover(state_for(&server), MovieFilterQuery::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code().as_u16(), 401);
    }
}
