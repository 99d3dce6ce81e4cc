//! REST handlers for the vectorize endpoint

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ChunkError, ChunkResult, ErrorBody};
use crate::repository::ChunkRepository;
use crate::service::VectorizeService;

/// Request to vectorize a batch of text chunks
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VectorizeRequest {
    pub chunks: Vec<String>,
}

/// Response for a successful vectorize call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VectorizeResponse {
    pub success: bool,
}

/// Vectorize chunks of text and store them in the database
#[utoipa::path(
    post,
    path = "",
    tag = "vectorize",
    request_body = VectorizeRequest,
    responses(
        (status = 200, description = "Success", body = VectorizeResponse),
        (status = 400, description = "Bad request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn vectorize<R: ChunkRepository>(
    State(service): State<Arc<VectorizeService<R>>>,
    Json(request): Json<VectorizeRequest>,
) -> ChunkResult<Json<VectorizeResponse>> {
    if request.chunks.is_empty() {
        return Err(ChunkError::Validation("No chunks provided".to_string()));
    }

    service.vectorize(&request.chunks).await?;

    Ok(Json(VectorizeResponse { success: true }))
}

/// OpenAPI documentation for the vectorize API
#[derive(OpenApi)]
#[openapi(
    paths(vectorize),
    components(schemas(VectorizeRequest, VectorizeResponse, ErrorBody)),
    tags((name = "vectorize", description = "Text chunk vectorization"))
)]
pub struct VectorizeApiDoc;

/// Create the router for the vectorize endpoint.
///
/// Routes are relative; the app mounts this under `/vectorize`.
pub fn router<R: ChunkRepository + 'static>(service: Arc<VectorizeService<R>>) -> Router {
    Router::new().route("/", post(vectorize)).with_state(service)
}
