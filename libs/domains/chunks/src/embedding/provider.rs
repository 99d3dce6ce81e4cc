use async_trait::async_trait;

use crate::error::ChunkResult;
use crate::models::{EmbeddingModel, EmbeddingProviderType, EmbeddingResult};

/// Trait for embedding generation providers
///
/// Implementations call different inference APIs (Workers AI, OpenAI).
/// `embed_batch` submits all texts in one request and returns one
/// embedding per input, in input order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the provider type
    fn provider_type(&self) -> EmbeddingProviderType;

    /// Generate an embedding for a single text
    async fn embed(&self, model: EmbeddingModel, text: &str) -> ChunkResult<EmbeddingResult>;

    /// Generate embeddings for multiple texts in one call
    async fn embed_batch(
        &self,
        model: EmbeddingModel,
        texts: &[String],
    ) -> ChunkResult<Vec<EmbeddingResult>>;
}
