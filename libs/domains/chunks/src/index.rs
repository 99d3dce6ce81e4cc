use async_trait::async_trait;

use crate::error::ChunkResult;
use crate::models::VectorPoint;

/// Trait abstracting the external vector store.
///
/// Entries are keyed by the chunk row id; their lifecycle beyond the
/// upsert is owned by the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create the backing collection if it does not exist
    async fn ensure_collection(&self, dimension: u32) -> ChunkResult<()>;

    /// Upsert entries into the index
    async fn upsert(&self, points: Vec<VectorPoint>) -> ChunkResult<()>;

    /// Verify the index is reachable
    async fn health(&self) -> ChunkResult<()>;
}
