//! Application state containing repositories

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{DirectorRepository, GenreRepository, MovieRepository};
use crate::infrastructure::{
    SeaOrmDirectorRepository, SeaOrmGenreRepository, SeaOrmMovieRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Movie repository
    pub movie_repo: Arc<dyn MovieRepository>,
    /// Director repository
    pub director_repo: Arc<dyn DirectorRepository>,
    /// Genre repository
    pub genre_repo: Arc<dyn GenreRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let movie_repo = Arc::new(SeaOrmMovieRepository::new(db.clone()));
        let director_repo = Arc::new(SeaOrmDirectorRepository::new(db.clone()));
        let genre_repo = Arc::new(SeaOrmGenreRepository::new(db));

        Self {
            movie_repo,
            director_repo,
            genre_repo,
        }
    }
}
