use async_trait::async_trait;

use crate::error::ChunkResult;
use crate::models::Chunk;

/// Repository trait for chunk persistence.
///
/// Abstracts the relational store. Rows are insert-only; the generated id
/// keys the chunk's vector index entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChunkRepository: Send + Sync {
    /// Insert one chunk and return the persisted row with its generated id
    async fn create(&self, data: &str) -> ChunkResult<Chunk>;

    /// Fetch a chunk by id
    async fn get_by_id(&self, id: i64) -> ChunkResult<Option<Chunk>>;
}
