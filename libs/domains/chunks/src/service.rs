use std::sync::Arc;

use futures::future::try_join_all;
use tracing::instrument;

use crate::embedding::EmbeddingProvider;
use crate::error::{ChunkError, ChunkResult};
use crate::index::VectorIndex;
use crate::models::{EmbeddingModel, VectorPoint};
use crate::repository::ChunkRepository;

/// Number of chunks embedded and written per cycle.
pub const EMBED_BATCH_SIZE: usize = 10;

/// Service orchestrating chunk persistence and vector indexing.
///
/// For each fixed-size batch of input texts the service requests
/// embeddings once, inserts the texts as rows, and upserts one index
/// entry per row keyed by the generated id. Batches run strictly in
/// order; the inserts and the upserts inside a batch each run
/// concurrently, with input order restored by position.
pub struct VectorizeService<R: ChunkRepository> {
    repository: Arc<R>,
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    model: EmbeddingModel,
}

impl<R: ChunkRepository> VectorizeService<R> {
    pub fn new(
        repository: R,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            embedder,
            index,
            model: EmbeddingModel::default(),
        }
    }

    pub fn with_model(mut self, model: EmbeddingModel) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> EmbeddingModel {
        self.model
    }

    /// Embed, persist, and index every chunk.
    ///
    /// A failure at any stage aborts the whole request with one error.
    /// There is no rollback: rows and index entries written by earlier
    /// batches stay committed, so callers must treat a failure as
    /// "unknown partial state".
    #[instrument(skip(self, chunks), fields(chunk_count = chunks.len()))]
    pub async fn vectorize(&self, chunks: &[String]) -> ChunkResult<()> {
        for batch in chunks.chunks(EMBED_BATCH_SIZE) {
            let embeddings = self.embedder.embed_batch(self.model, batch).await?;

            if embeddings.len() != batch.len() {
                return Err(ChunkError::Embedding(format!(
                    "Expected {} embeddings, got {}",
                    batch.len(),
                    embeddings.len()
                )));
            }

            let records =
                try_join_all(batch.iter().map(|data| self.repository.create(data))).await?;

            try_join_all(records.iter().zip(embeddings).map(|(record, embedding)| {
                self.index
                    .upsert(vec![VectorPoint::new(record.id, embedding.values)])
            }))
            .await?;

            tracing::debug!(batch_size = batch.len(), "Vectorized chunk batch");
        }

        Ok(())
    }
}
