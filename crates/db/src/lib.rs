//! Persistence for the employee directory.
//!
//! Handlers never talk to a backend directly: they hold an
//! `Arc<dyn DirectoryStore>` (see [`store`]) which is either the Postgres
//! store built on the zero-sized repositories in [`repositories`], or the
//! in-memory store used by tests and database-less runs.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod join;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
