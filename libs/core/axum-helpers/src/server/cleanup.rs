//! Database connection cleanup for graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM PostgreSQL connection.
///
/// `DatabaseConnection` closes automatically on drop; closing explicitly
/// ensures the outcome is logged during shutdown.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
