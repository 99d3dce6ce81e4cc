//! Handler tests for the vectorize endpoint
//!
//! These verify the HTTP contract against stub collaborators:
//! - Request deserialization (JSON → Rust structs)
//! - HTTP status codes
//! - Exact response bodies
//!
//! Unlike the repository tests, no external services are needed.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_chunks::{
    Chunk, ChunkError, ChunkRepository, ChunkResult, EmbeddingModel, EmbeddingProvider,
    EmbeddingProviderType, EmbeddingResult, VectorIndex, VectorPoint, VectorizeService, handlers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

struct StubRepository {
    next_id: AtomicI64,
}

impl StubRepository {
    fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ChunkRepository for StubRepository {
    async fn create(&self, data: &str) -> ChunkResult<Chunk> {
        Ok(Chunk {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            data: data.to_string(),
            created_at: chrono::Utc::now(),
        })
    }

    async fn get_by_id(&self, _id: i64) -> ChunkResult<Option<Chunk>> {
        Ok(None)
    }
}

struct StubEmbedder;

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    fn provider_type(&self) -> EmbeddingProviderType {
        EmbeddingProviderType::WorkersAi
    }

    async fn embed(&self, model: EmbeddingModel, text: &str) -> ChunkResult<EmbeddingResult> {
        let mut results = self.embed_batch(model, &[text.to_string()]).await?;
        Ok(results.remove(0))
    }

    async fn embed_batch(
        &self,
        _model: EmbeddingModel,
        texts: &[String],
    ) -> ChunkResult<Vec<EmbeddingResult>> {
        Ok(texts
            .iter()
            .map(|_| EmbeddingResult::new(vec![0.0; 4]))
            .collect())
    }
}

struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    fn provider_type(&self) -> EmbeddingProviderType {
        EmbeddingProviderType::WorkersAi
    }

    async fn embed(&self, _model: EmbeddingModel, _text: &str) -> ChunkResult<EmbeddingResult> {
        Err(ChunkError::Embedding("inference unavailable".to_string()))
    }

    async fn embed_batch(
        &self,
        _model: EmbeddingModel,
        _texts: &[String],
    ) -> ChunkResult<Vec<EmbeddingResult>> {
        Err(ChunkError::Embedding("inference unavailable".to_string()))
    }
}

struct StubIndex;

#[async_trait]
impl VectorIndex for StubIndex {
    async fn ensure_collection(&self, _dimension: u32) -> ChunkResult<()> {
        Ok(())
    }

    async fn upsert(&self, _points: Vec<VectorPoint>) -> ChunkResult<()> {
        Ok(())
    }

    async fn health(&self) -> ChunkResult<()> {
        Ok(())
    }
}

fn app(embedder: Arc<dyn EmbeddingProvider>) -> axum::Router {
    let service = Arc::new(VectorizeService::new(
        StubRepository::new(),
        embedder,
        Arc::new(StubIndex),
    ));
    handlers::router(service)
}

fn post_vectorize(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_vectorize_returns_success_true() {
    let response = app(Arc::new(StubEmbedder))
        .oneshot(post_vectorize(json!({"chunks": ["a", "b"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"success": true})
    );
}

#[tokio::test]
async fn test_large_submission_returns_success_true() {
    let chunks: Vec<String> = (0..25).map(|i| format!("chunk {}", i)).collect();

    let response = app(Arc::new(StubEmbedder))
        .oneshot(post_vectorize(json!({ "chunks": chunks })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"success": true})
    );
}

#[tokio::test]
async fn test_empty_chunks_rejected_with_exact_body() {
    let response = app(Arc::new(StubEmbedder))
        .oneshot(post_vectorize(json!({"chunks": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"error": "No chunks provided"})
    );
}

#[tokio::test]
async fn test_missing_chunks_field_rejected_by_extractor() {
    let response = app(Arc::new(StubEmbedder))
        .oneshot(post_vectorize(json!({"texts": ["a"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_chunk_type_rejected_by_extractor() {
    let response = app(Arc::new(StubEmbedder))
        .oneshot(post_vectorize(json!({"chunks": [1, 2, 3]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_processing_failure_collapses_to_flat_500() {
    let response = app(Arc::new(FailingEmbedder))
        .oneshot(post_vectorize(json!({"chunks": ["a"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Failed to insert vectors");
    assert_eq!(body["details"], "Embedding error: inference unavailable");
}
