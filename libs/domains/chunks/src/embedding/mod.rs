//! Embedding generation providers.
//!
//! The inference service is reached through the [`EmbeddingProvider`]
//! trait; [`WorkersAiProvider`] is the default implementation,
//! [`OpenAiProvider`] the alternative. Selection is model-driven via
//! [`EmbeddingConfig`].

pub mod openai;
pub mod provider;
pub mod workers_ai;

pub use openai::{OpenAiConfig, OpenAiProvider};
pub use provider::EmbeddingProvider;
pub use workers_ai::{WorkersAiConfig, WorkersAiProvider};

use std::sync::Arc;

use crate::error::ChunkResult;
use crate::models::{EmbeddingModel, EmbeddingProviderType};

/// Embedding configuration: which model to run, and therefore which
/// provider serves it.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProviderType,
    pub model: EmbeddingModel,
}

impl EmbeddingConfig {
    pub fn new(model: EmbeddingModel) -> Self {
        Self {
            provider: model.provider(),
            model,
        }
    }

    /// Reads `EMBEDDING_MODEL` (a model name, e.g.
    /// `@cf/baai/bge-large-en-v1.5`); defaults to bge-large-en-v1.5.
    pub fn from_env() -> ChunkResult<Self> {
        let model = match std::env::var("EMBEDDING_MODEL") {
            Ok(name) => name.parse()?,
            Err(_) => EmbeddingModel::default(),
        };

        Ok(Self::new(model))
    }
}

/// Build the provider implementation selected by the configuration,
/// reading provider credentials from the environment.
pub fn provider_from_env(config: &EmbeddingConfig) -> ChunkResult<Arc<dyn EmbeddingProvider>> {
    match config.provider {
        EmbeddingProviderType::WorkersAi => Ok(Arc::new(WorkersAiProvider::from_env()?)),
        EmbeddingProviderType::OpenAi => Ok(Arc::new(OpenAiProvider::from_env()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_bge_large() {
        let config = EmbeddingConfig::new(EmbeddingModel::default());
        assert_eq!(config.model, EmbeddingModel::BgeLargeEnV15);
        assert_eq!(config.provider, EmbeddingProviderType::WorkersAi);
    }

    #[test]
    fn test_config_follows_model_provider() {
        let config = EmbeddingConfig::new(EmbeddingModel::TextEmbedding3Small);
        assert_eq!(config.provider, EmbeddingProviderType::OpenAi);
    }
}
