//! Chunk Vectorization Domain Library
//!
//! Domain implementation for ingesting raw text chunks: each chunk is
//! embedded by an inference provider, persisted as a row in PostgreSQL,
//! and indexed in Qdrant under the generated row id.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ VectorizeService │  ← batching, orchestration
//! └───┬─────┬─────┬──┘
//!     │     │     │
//! ┌───▼───┐ │ ┌───▼─────────┐
//! │ Chunk │ │ │ VectorIndex │
//! │ Repo  │ │ │   (trait)   │
//! │(trait)│ │ └───┬─────────┘
//! └───┬───┘ │ ┌───▼────────┐
//!     │     │ │ QdrantIndex│
//! ┌───▼───┐ │ └────────────┘
//! │  Pg   │ │ ┌──────────────────┐
//! │ Chunk │ └─│EmbeddingProvider │
//! │ Repo  │   │     (trait)      │
//! └───────┘   └───┬──────────────┘
//!             ┌───▼──────────────┐
//!             │ WorkersAiProvider│
//!             │ OpenAiProvider   │
//!             └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_chunks::{
//!     EmbeddingConfig, PgChunkRepository, QdrantConfig, QdrantIndex, VectorIndex,
//!     VectorizeService, embedding,
//! };
//! use std::sync::Arc;
//!
//! # async fn example(db: sea_orm::DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
//! let embedding_config = EmbeddingConfig::from_env()?;
//! let embedder = embedding::provider_from_env(&embedding_config)?;
//!
//! let index = Arc::new(QdrantIndex::new(QdrantConfig::from_env()?).await?);
//! index.ensure_collection(embedding_config.model.dimension()).await?;
//!
//! let service = VectorizeService::new(PgChunkRepository::new(db), embedder, index)
//!     .with_model(embedding_config.model);
//! service.vectorize(&["some text".to_string()]).await?;
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod index;
pub mod models;
pub mod postgres;
pub mod qdrant;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use embedding::{EmbeddingConfig, EmbeddingProvider, OpenAiProvider, WorkersAiProvider};
pub use error::{ChunkError, ChunkResult, ErrorBody};
pub use handlers::{VectorizeApiDoc, VectorizeRequest, VectorizeResponse};
pub use index::VectorIndex;
pub use models::{Chunk, EmbeddingModel, EmbeddingProviderType, EmbeddingResult, VectorPoint};
pub use postgres::PgChunkRepository;
pub use qdrant::{QdrantConfig, QdrantIndex};
pub use repository::ChunkRepository;
pub use service::{EMBED_BATCH_SIZE, VectorizeService};
