use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;
use domain_chunks::{EmbeddingConfig, QdrantConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub embedding: EmbeddingConfig,
    pub qdrant: QdrantConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if DATABASE_URL not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let embedding = EmbeddingConfig::from_env()?;
        let qdrant = QdrantConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            embedding,
            qdrant,
            server,
            environment,
        })
    }
}
