//! SeaORM implementation of DirectorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{Director, DirectorPatch, DirectorRepository, DomainError, NewDirector};
use crate::models::director::{ActiveModel, Column, Entity as DirectorEntity, Model};

impl From<Model> for Director {
    fn from(d: Model) -> Self {
        Director {
            id: d.id,
            name: d.name,
        }
    }
}

/// SeaORM-based implementation of DirectorRepository
pub struct SeaOrmDirectorRepository {
    db: DatabaseConnection,
}

impl SeaOrmDirectorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectorRepository for SeaOrmDirectorRepository {
    async fn find_all(&self) -> Result<Vec<Director>, DomainError> {
        let directors = DirectorEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(directors.into_iter().map(Director::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, DomainError> {
        let director = DirectorEntity::find_by_id(id).one(&self.db).await?;

        Ok(director.map(Director::from))
    }

    async fn create(&self, input: NewDirector) -> Result<Director, DomainError> {
        let txn = self.db.begin().await?;

        let director = ActiveModel {
            name: Set(input.name),
            ..Default::default()
        };

        let result = director.insert(&txn).await?;
        txn.commit().await?;

        tracing::debug!(id = result.id, "director created");
        Ok(result.into())
    }

    async fn update(&self, id: i32, patch: DirectorPatch) -> Result<Director, DomainError> {
        let txn = self.db.begin().await?;

        let director = DirectorEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Director",
                id,
            })?;

        let director = match patch.name {
            Some(name) => {
                let mut active_model: ActiveModel = director.into();
                active_model.name = Set(name);
                active_model.update(&txn).await?
            }
            None => director,
        };

        txn.commit().await?;

        tracing::debug!(id, "director updated");
        Ok(director.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        let result = DirectorEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Director",
                id,
            });
        }

        txn.commit().await?;

        tracing::debug!(id, "director deleted");
        Ok(())
    }
}
