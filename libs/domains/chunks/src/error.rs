use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Vector index error: {0}")]
    Index(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ChunkResult<T> = Result<T, ChunkError>;

impl From<reqwest::Error> for ChunkError {
    fn from(err: reqwest::Error) -> Self {
        ChunkError::Embedding(err.to_string())
    }
}

impl From<sea_orm::DbErr> for ChunkError {
    fn from(err: sea_orm::DbErr) -> Self {
        ChunkError::Database(err.to_string())
    }
}

impl From<qdrant_client::QdrantError> for ChunkError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        ChunkError::Index(err.to_string())
    }
}

/// Error body returned by the vectorize API.
///
/// The shape is part of the public contract: validation failures carry
/// only `error`, processing failures carry the generic `error` plus the
/// underlying message in `details`. The processing stage that failed is
/// deliberately not surfaced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ChunkError {
    fn into_response(self) -> Response {
        match self {
            ChunkError::Validation(message) => {
                tracing::info!("Bad request: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: message,
                        details: None,
                    }),
                )
            }
            other => {
                tracing::error!("Failed to insert vectors: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Failed to insert vectors".to_string(),
                        details: Some(other.to_string()),
                    }),
                )
            }
        }
        .into_response()
    }
}
