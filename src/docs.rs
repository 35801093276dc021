use utoipa::OpenApi;
use crate::modules::movie::dto::{Movie, MovieSummary};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
    ),
    components(
        schemas(Movie, MovieSummary)
    ),
    tags(
        (name = "Movies", description = "Movie discovery backed by TMDB")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_movie_routes() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/api/v1/movies").unwrap();
        let get = item.get.as_ref().unwrap();
        assert!(get.responses.responses.contains_key("422"));
        assert!(get.responses.responses.contains_key("4XX"));
        let post = item.post.as_ref().unwrap();
        assert!(post.responses.responses.contains_key("422"));
    }
}
