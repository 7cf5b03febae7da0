//! SeaORM implementation of GenreRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{DomainError, Genre, GenrePatch, GenreRepository, NewGenre};
use crate::models::genre::{ActiveModel, Column, Entity as GenreEntity, Model};

impl From<Model> for Genre {
    fn from(g: Model) -> Self {
        Genre {
            id: g.id,
            name: g.name,
        }
    }
}

/// SeaORM-based implementation of GenreRepository
pub struct SeaOrmGenreRepository {
    db: DatabaseConnection,
}

impl SeaOrmGenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for SeaOrmGenreRepository {
    async fn find_all(&self) -> Result<Vec<Genre>, DomainError> {
        let genres = GenreEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(genres.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DomainError> {
        let genre = GenreEntity::find_by_id(id).one(&self.db).await?;

        Ok(genre.map(Genre::from))
    }

    async fn create(&self, input: NewGenre) -> Result<Genre, DomainError> {
        let txn = self.db.begin().await?;

        let genre = ActiveModel {
            name: Set(input.name),
            ..Default::default()
        };

        let result = genre.insert(&txn).await?;
        txn.commit().await?;

        tracing::debug!(id = result.id, "genre created");
        Ok(result.into())
    }

    async fn update(&self, id: i32, patch: GenrePatch) -> Result<Genre, DomainError> {
        let txn = self.db.begin().await?;

        let genre = GenreEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Genre",
                id,
            })?;

        let genre = match patch.name {
            Some(name) => {
                let mut active_model: ActiveModel = genre.into();
                active_model.name = Set(name);
                active_model.update(&txn).await?
            }
            None => genre,
        };

        txn.commit().await?;

        tracing::debug!(id, "genre updated");
        Ok(genre.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        let result = GenreEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Genre",
                id,
            });
        }

        txn.commit().await?;

        tracing::debug!(id, "genre deleted");
        Ok(())
    }
}
