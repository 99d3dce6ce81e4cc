//! Application state management.
//!
//! Shared state for handlers that need access to the service
//! dependencies, mainly the readiness checks.

use domain_chunks::VectorIndex;
use std::sync::Arc;

/// Shared application state.
///
/// Cloned per handler; only cheap Arc and pool-handle clones.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Vector index handle, used for readiness checks
    pub index: Arc<dyn VectorIndex>,
}
