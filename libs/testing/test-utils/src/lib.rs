//! Shared test infrastructure
//!
//! Provides a testcontainers-backed PostgreSQL database with the schema
//! migrations applied.

pub mod postgres;

pub use postgres::TestDatabase;
