//! PostgreSQL content repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, QueryOrder};

use migration::{Migrator, MigratorTrait};
use quill_core::domain::{Content, NewContent};
use quill_core::error::RepoError;
use quill_core::ports::ContentRepository;

use super::entity::content::{self, Entity as ContentEntity};

/// PostgreSQL content repository backed by a SeaORM connection pool.
pub struct PostgresContentRepository {
    db: DbConn,
}

impl PostgresContentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn initialize(&self) -> Result<(), RepoError> {
        tracing::info!("Applying pending migrations...");
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }

    async fn create(&self, content: NewContent) -> Result<Content, RepoError> {
        let active_model: content::ActiveModel = content.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(content_id = model.id, "Content stored");
        Ok(model.into())
    }

    async fn list_all(&self) -> Result<Vec<Content>, RepoError> {
        let result = ContentEntity::find()
            .order_by_asc(content::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
