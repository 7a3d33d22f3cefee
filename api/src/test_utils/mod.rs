//! Test utilities
//!
//! Manual mock implementations, fixtures and a throwaway database.
//!
//! Services are tested against the in-memory repositories. Adapter and
//! router tests run against an in-memory SQLite database bootstrapped
//! from the same entity definitions as production.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::bootstrap_schema;

/// Fresh in-memory SQLite database with tables created and teams seeded.
///
/// A single pooled connection keeps the memory database alive.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to open sqlite memory database");
    bootstrap_schema(&db)
        .await
        .expect("Failed to bootstrap schema");
    db
}
