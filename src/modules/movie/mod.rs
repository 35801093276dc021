use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/movies",
        get(handler::list_movies).post(handler::create_movie),
    )
}
