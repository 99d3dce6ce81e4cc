use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::entity;
use crate::error::{ChunkError, ChunkResult};
use crate::models::Chunk;
use crate::repository::ChunkRepository;

/// PostgreSQL-backed implementation of ChunkRepository
pub struct PgChunkRepository {
    db: DatabaseConnection,
}

impl PgChunkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChunkRepository for PgChunkRepository {
    async fn create(&self, data: &str) -> ChunkResult<Chunk> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            data: Set(data.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        // The returned model carries the database-generated id
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| ChunkError::Database(format!("Failed to insert chunk: {}", e)))?;

        tracing::debug!(chunk_id = model.id, "Inserted chunk");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ChunkResult<Option<Chunk>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ChunkError::Database(e.to_string()))?;

        Ok(model.map(Into::into))
    }
}
