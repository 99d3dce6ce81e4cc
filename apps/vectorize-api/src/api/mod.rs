use axum::Router;
use domain_chunks::{ChunkRepository, VectorizeService, handlers};
use std::sync::Arc;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Returns a stateless Router (sub-routers have state already applied).
pub fn routes<R: ChunkRepository + 'static>(service: Arc<VectorizeService<R>>) -> Router {
    Router::new().nest("/vectorize", handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
