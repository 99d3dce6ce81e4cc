use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_chunks::{PgChunkRepository, QdrantIndex, VectorIndex, VectorizeService, embedding};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // PostgreSQL: connect with retry, then apply migrations
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, "vectorize_api")
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    // Vector index: the collection must match the embedding model dimension
    info!("Connecting to Qdrant at {}", config.qdrant.url);
    let index: Arc<dyn VectorIndex> = Arc::new(QdrantIndex::new(config.qdrant.clone()).await?);
    index
        .ensure_collection(config.embedding.model.dimension())
        .await?;

    // Embedding provider selected by configuration
    let embedder = embedding::provider_from_env(&config.embedding)?;
    info!(
        "Embedding provider ready ({})",
        config.embedding.model.model_name()
    );

    let service = Arc::new(
        VectorizeService::new(PgChunkRepository::new(db.clone()), embedder, index.clone())
            .with_model(config.embedding.model),
    );

    let state = AppState { config, db, index };

    // Build router with API routes; create_router adds docs/middleware
    let api_routes = api::routes(service);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check against PostgreSQL and Qdrant
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting vectorize API with graceful shutdown (30s timeout)");

    let server_config = state.config.server.clone();

    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        close_postgres(state.db, "main").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Vectorize API shutdown complete");
    Ok(())
}
