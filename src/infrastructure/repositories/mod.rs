//! Repository implementations using SeaORM

pub mod director_repository;
pub mod genre_repository;
pub mod movie_repository;

pub use director_repository::SeaOrmDirectorRepository;
pub use genre_repository::SeaOrmGenreRepository;
pub use movie_repository::SeaOrmMovieRepository;
