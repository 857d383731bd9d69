use std::sync::Arc;

use anyhow::Context;
use roster_db::store::{DirectoryStore, MemoryStore, PgStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store handle is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The directory store handle (Postgres or in-memory).
    pub store: Arc<dyn DirectoryStore>,
}

/// Open the store selected by `config`.
///
/// With a `DATABASE_URL` this connects, health-checks and migrates Postgres;
/// otherwise it falls back to an empty in-memory store.
pub async fn open_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn DirectoryStore>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set; using the in-memory store (data is lost on exit)");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let pool = roster_db::create_pool(database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    roster_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    roster_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgStore::new(pool)))
}
