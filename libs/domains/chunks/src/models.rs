use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ChunkError;

/// A persisted text chunk.
///
/// The generated `id` is the join key between the relational row and its
/// vector index entry. Rows are insert-only; nothing updates or deletes
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Chunk {
    pub id: i64,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// Embedding provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum EmbeddingProviderType {
    #[default]
    WorkersAi,
    OpenAi,
}

/// Embedding model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum EmbeddingModel {
    // Workers AI models
    /// Workers AI baai/bge-large-en-v1.5 (1024 dimensions)
    #[default]
    BgeLargeEnV15,
    /// Workers AI baai/bge-base-en-v1.5 (768 dimensions)
    BgeBaseEnV15,
    /// Workers AI baai/bge-small-en-v1.5 (384 dimensions)
    BgeSmallEnV15,

    // OpenAI models
    /// OpenAI text-embedding-3-small (1536 dimensions)
    TextEmbedding3Small,
    /// OpenAI text-embedding-3-large (3072 dimensions)
    TextEmbedding3Large,
}

impl EmbeddingModel {
    pub fn dimension(&self) -> u32 {
        match self {
            EmbeddingModel::BgeLargeEnV15 => 1024,
            EmbeddingModel::BgeBaseEnV15 => 768,
            EmbeddingModel::BgeSmallEnV15 => 384,
            EmbeddingModel::TextEmbedding3Small => 1536,
            EmbeddingModel::TextEmbedding3Large => 3072,
        }
    }

    pub fn model_name(&self) -> &'static str {
        match self {
            EmbeddingModel::BgeLargeEnV15 => "@cf/baai/bge-large-en-v1.5",
            EmbeddingModel::BgeBaseEnV15 => "@cf/baai/bge-base-en-v1.5",
            EmbeddingModel::BgeSmallEnV15 => "@cf/baai/bge-small-en-v1.5",
            EmbeddingModel::TextEmbedding3Small => "text-embedding-3-small",
            EmbeddingModel::TextEmbedding3Large => "text-embedding-3-large",
        }
    }

    /// Get the provider type this model belongs to
    pub fn provider(&self) -> EmbeddingProviderType {
        match self {
            EmbeddingModel::BgeLargeEnV15
            | EmbeddingModel::BgeBaseEnV15
            | EmbeddingModel::BgeSmallEnV15 => EmbeddingProviderType::WorkersAi,
            EmbeddingModel::TextEmbedding3Small | EmbeddingModel::TextEmbedding3Large => {
                EmbeddingProviderType::OpenAi
            }
        }
    }
}

impl std::str::FromStr for EmbeddingModel {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "@cf/baai/bge-large-en-v1.5" => Ok(EmbeddingModel::BgeLargeEnV15),
            "@cf/baai/bge-base-en-v1.5" => Ok(EmbeddingModel::BgeBaseEnV15),
            "@cf/baai/bge-small-en-v1.5" => Ok(EmbeddingModel::BgeSmallEnV15),
            "text-embedding-3-small" => Ok(EmbeddingModel::TextEmbedding3Small),
            "text-embedding-3-large" => Ok(EmbeddingModel::TextEmbedding3Large),
            other => Err(ChunkError::Config(format!(
                "Unknown embedding model: {}",
                other
            ))),
        }
    }
}

/// Embedding generated for one chunk
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingResult {
    pub values: Vec<f32>,
    pub dimension: u32,
}

impl EmbeddingResult {
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            dimension: values.len() as u32,
            values,
        }
    }
}

/// A vector index entry: the chunk row id paired with its embedding
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPoint {
    pub id: i64,
    pub values: Vec<f32>,
}

impl VectorPoint {
    pub fn new(id: i64, values: Vec<f32>) -> Self {
        Self { id, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(
            EmbeddingModel::BgeLargeEnV15.model_name(),
            "@cf/baai/bge-large-en-v1.5"
        );
        assert_eq!(
            EmbeddingModel::TextEmbedding3Small.model_name(),
            "text-embedding-3-small"
        );
    }

    #[test]
    fn test_model_dimensions() {
        assert_eq!(EmbeddingModel::BgeLargeEnV15.dimension(), 1024);
        assert_eq!(EmbeddingModel::BgeSmallEnV15.dimension(), 384);
        assert_eq!(EmbeddingModel::TextEmbedding3Large.dimension(), 3072);
    }

    #[test]
    fn test_model_provider_affinity() {
        assert_eq!(
            EmbeddingModel::BgeBaseEnV15.provider(),
            EmbeddingProviderType::WorkersAi
        );
        assert_eq!(
            EmbeddingModel::TextEmbedding3Small.provider(),
            EmbeddingProviderType::OpenAi
        );
    }

    #[test]
    fn test_model_round_trips_through_name() {
        for model in [
            EmbeddingModel::BgeLargeEnV15,
            EmbeddingModel::BgeBaseEnV15,
            EmbeddingModel::BgeSmallEnV15,
            EmbeddingModel::TextEmbedding3Small,
            EmbeddingModel::TextEmbedding3Large,
        ] {
            assert_eq!(model.model_name().parse::<EmbeddingModel>().unwrap(), model);
        }
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let err = "bert-base-uncased".parse::<EmbeddingModel>().unwrap_err();
        assert!(err.to_string().contains("bert-base-uncased"));
    }

    #[test]
    fn test_embedding_result_dimension() {
        let result = EmbeddingResult::new(vec![0.1, 0.2, 0.3]);
        assert_eq!(result.dimension, 3);
    }
}
