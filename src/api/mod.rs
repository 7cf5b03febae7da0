pub mod directors;
pub mod error;
pub mod extract;
pub mod genres;
pub mod health;
pub mod movies;

use axum::{Router, routing::get};

use crate::api_docs;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(api_docs::openapi_json))
        // Movies
        .route(
            "/movies/",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        // Directors
        .route(
            "/directors/",
            get(directors::list_directors).post(directors::create_director),
        )
        .route(
            "/directors",
            get(directors::list_directors).post(directors::create_director),
        )
        .route(
            "/directors/:id",
            get(directors::get_director)
                .put(directors::update_director)
                .delete(directors::delete_director),
        )
        // Genres
        .route(
            "/genres/",
            get(genres::list_genres).post(genres::create_genre),
        )
        .route(
            "/genres",
            get(genres::list_genres).post(genres::create_genre),
        )
        .route(
            "/genres/:id",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
        .with_state(state)
}
