//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::DomainError;

/// Movie data for API responses. Relations are exposed as raw ids only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Director data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Director {
    pub id: i32,
    pub name: String,
}

/// Genre data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Equality predicates for movie listing. `None` means "don't filter".
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

/// Input for creating a movie
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Partial movie update.
///
/// Outer `None` leaves the column untouched; `Some(None)` clears a nullable column.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub trailer: Option<Option<String>>,
    pub year: Option<Option<i32>>,
    pub rating: Option<Option<f64>>,
    pub genre_id: Option<Option<i32>>,
    pub director_id: Option<Option<i32>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.trailer.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.genre_id.is_none()
            && self.director_id.is_none()
    }
}

/// Input for creating a director
#[derive(Debug, Clone, PartialEq)]
pub struct NewDirector {
    pub name: String,
}

/// Partial director update; an empty patch is a no-op.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DirectorPatch {
    pub name: Option<String>,
}

/// Input for creating a genre
#[derive(Debug, Clone, PartialEq)]
pub struct NewGenre {
    pub name: String,
}

/// Partial genre update; an empty patch is a no-op.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenrePatch {
    pub name: Option<String>,
}

/// Repository trait for Movie entity
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find all movies matching every predicate in the filter, ordered by id
    async fn find_all(&self, filter: MovieFilter) -> Result<Vec<Movie>, DomainError>;

    /// Find a single movie by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError>;

    /// Create a new movie. Foreign keys are stored as given.
    async fn create(&self, input: NewMovie) -> Result<Movie, DomainError>;

    /// Apply a partial update to exactly one movie
    async fn update(&self, id: i32, patch: MoviePatch) -> Result<(), DomainError>;

    /// Delete a movie by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Director entity
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    /// Find all directors
    async fn find_all(&self) -> Result<Vec<Director>, DomainError>;

    /// Find a director by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, DomainError>;

    /// Create a new director
    async fn create(&self, input: NewDirector) -> Result<Director, DomainError>;

    /// Update a director, returning the stored row
    async fn update(&self, id: i32, patch: DirectorPatch) -> Result<Director, DomainError>;

    /// Delete a director by ID. Movies pointing at it keep their `director_id`.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Genre entity
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Find all genres
    async fn find_all(&self) -> Result<Vec<Genre>, DomainError>;

    /// Find a genre by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DomainError>;

    /// Create a new genre
    async fn create(&self, input: NewGenre) -> Result<Genre, DomainError>;

    /// Update a genre, returning the stored row
    async fn update(&self, id: i32, patch: GenrePatch) -> Result<Genre, DomainError>;

    /// Delete a genre by ID. Movies pointing at it keep their `genre_id`.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
