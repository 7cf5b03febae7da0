//! SeaORM implementation of MovieRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::{DomainError, Movie, MovieFilter, MoviePatch, MovieRepository, NewMovie};
use crate::models::movie::{ActiveModel, Column, Entity as MovieEntity, Model};

impl From<Model> for Movie {
    fn from(m: Model) -> Self {
        Movie {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

/// Only the columns present in the patch are `Set`; the rest stay `NotSet`
/// and are left out of the UPDATE statement.
fn patch_to_active_model(patch: MoviePatch) -> ActiveModel {
    let mut changes = <ActiveModel as Default>::default();
    if let Some(title) = patch.title {
        changes.title = Set(title);
    }
    if let Some(description) = patch.description {
        changes.description = Set(description);
    }
    if let Some(trailer) = patch.trailer {
        changes.trailer = Set(trailer);
    }
    if let Some(year) = patch.year {
        changes.year = Set(year);
    }
    if let Some(rating) = patch.rating {
        changes.rating = Set(rating);
    }
    if let Some(genre_id) = patch.genre_id {
        changes.genre_id = Set(genre_id);
    }
    if let Some(director_id) = patch.director_id {
        changes.director_id = Set(director_id);
    }
    changes
}

/// SeaORM-based implementation of MovieRepository
pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn find_all(&self, filter: MovieFilter) -> Result<Vec<Movie>, DomainError> {
        let mut query = MovieEntity::find();

        if let Some(director_id) = filter.director_id {
            query = query.filter(Column::DirectorId.eq(director_id));
        }

        if let Some(genre_id) = filter.genre_id {
            query = query.filter(Column::GenreId.eq(genre_id));
        }

        let movies = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(movies.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError> {
        let movie = MovieEntity::find_by_id(id).one(&self.db).await?;

        Ok(movie.map(Movie::from))
    }

    async fn create(&self, input: NewMovie) -> Result<Movie, DomainError> {
        let txn = self.db.begin().await?;

        let movie = ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            trailer: Set(input.trailer),
            year: Set(input.year),
            rating: Set(input.rating),
            genre_id: Set(input.genre_id),
            director_id: Set(input.director_id),
            ..Default::default()
        };

        let result = movie.insert(&txn).await?;
        txn.commit().await?;

        tracing::debug!(id = result.id, "movie created");
        Ok(result.into())
    }

    async fn update(&self, id: i32, patch: MoviePatch) -> Result<(), DomainError> {
        if patch.is_empty() {
            return Err(DomainError::Validation(
                "request body contains no fields to update".to_string(),
            ));
        }

        // Dropping `txn` on any early return rolls the transaction back
        let txn = self.db.begin().await?;

        if MovieEntity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "Movie",
                id,
            });
        }

        let result = MovieEntity::update_many()
            .set(patch_to_active_model(patch))
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if result.rows_affected != 1 {
            return Err(DomainError::Conflict(format!(
                "update of movie {} affected {} rows",
                id, result.rows_affected
            )));
        }

        txn.commit().await?;

        tracing::debug!(id, "movie updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        let result = MovieEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Movie",
                id,
            });
        }

        txn.commit().await?;

        tracing::debug!(id, "movie deleted");
        Ok(())
    }
}
