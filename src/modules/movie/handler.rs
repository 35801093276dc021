use super::dto::{Movie, MovieFilterQuery, MovieSummary};
use super::service::MovieService;
use crate::common::response::{ApiError, ApiResponse};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::error;
use validator::Validate;

/// Discover popular movies
/// Returns at most five movies, most popular first.
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    params(MovieFilterQuery),
    responses(
        (status = 200, description = "Top movies for the filter", body = Vec<MovieSummary>),
        (status = 404, description = "Genre not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid filter (genre length or non-integer year)", body = ApiResponse<String>),
        (status = "4XX", description = "TMDB rejected the request; its status is mirrored", body = ApiResponse<String>),
        (status = "5XX", description = "TMDB failed (status mirrored) or an internal error occurred", body = ApiResponse<String>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<MovieFilterQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    if let Err(e) = query.validate() {
        return ApiError(e.to_string(), StatusCode::UNPROCESSABLE_ENTITY).into_response();
    }

    match MovieService::discover(state, query).await {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => {
            if e.status_code().is_server_error() {
                error!(error = %e, "Movie discovery failed");
            }
            ApiError::from(e).into_response()
        }
    }
}

/// Echo a movie record
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = Movie,
    responses(
        (status = 200, description = "The submitted movie, unchanged", body = Movie),
        (status = 422, description = "Malformed movie", body = ApiResponse<String>)
    ),
    tag = "Movies"
)]
pub async fn create_movie(payload: Result<Json<Movie>, JsonRejection>) -> impl IntoResponse {
    match payload {
        Ok(Json(movie)) => (StatusCode::OK, Json(movie)).into_response(),
        Err(rejection) => ApiError::from(rejection).into_response(),
    }
}
