use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointStruct, UpsertPointsBuilder, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use tracing::info;

use super::QdrantConfig;
use crate::error::{ChunkError, ChunkResult};
use crate::index::VectorIndex;
use crate::models::VectorPoint;

/// Qdrant-backed implementation of [`VectorIndex`].
///
/// Point ids are the chunk row ids (Qdrant ids are numeric, so the row id
/// is used directly rather than its string form).
pub struct QdrantIndex {
    client: Qdrant,
    collection: String,
}

impl QdrantIndex {
    pub async fn new(config: QdrantConfig) -> ChunkResult<Self> {
        let mut builder = Qdrant::from_url(&config.url);

        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }

        builder = builder.timeout(Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| ChunkError::Index(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            collection: config.collection,
        })
    }

    pub fn from_client(client: Qdrant, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn ensure_collection(&self, dimension: u32) -> ChunkResult<()> {
        if self.client.collection_exists(&self.collection).await? {
            return Ok(());
        }

        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection).vectors_config(
                    VectorParamsBuilder::new(dimension as u64, Distance::Cosine),
                ),
            )
            .await?;

        info!(
            "Created vector collection '{}' ({} dimensions)",
            self.collection, dimension
        );
        Ok(())
    }

    async fn upsert(&self, points: Vec<VectorPoint>) -> ChunkResult<()> {
        let points: Vec<PointStruct> = points
            .into_iter()
            .map(|point| PointStruct::new(point.id as u64, point.values, Payload::new()))
            .collect();

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, points).wait(true))
            .await?;

        Ok(())
    }

    async fn health(&self) -> ChunkResult<()> {
        self.client.health_check().await?;
        Ok(())
    }
}
