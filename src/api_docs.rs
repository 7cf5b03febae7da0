use crate::api;
use crate::domain::{Director, Genre, Movie};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::movies::list_movies,
        api::movies::create_movie,
        api::movies::get_movie,
        api::movies::update_movie,
        api::movies::delete_movie,
        api::directors::list_directors,
        api::directors::create_director,
        api::directors::get_director,
        api::directors::update_director,
        api::directors::delete_director,
        api::genres::list_genres,
        api::genres::create_genre,
        api::genres::get_genre,
        api::genres::update_genre,
        api::genres::delete_genre,
    ),
    components(
        schemas(
            Movie,
            Director,
            Genre,
            api::movies::CreateMovieRequest,
            api::movies::UpdateMovieRequest,
            api::directors::CreateDirectorRequest,
            api::directors::UpdateDirectorRequest,
            api::genres::CreateGenreRequest,
            api::genres::UpdateGenreRequest,
            api::error::ErrorBody,
            api::health::HealthStatus,
        )
    ),
    tags(
        (name = "cinematheque", description = "Movie catalog API")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
