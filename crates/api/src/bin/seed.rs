//! Replace the contents of the Postgres directory with the demo data set.
//!
//! Usage: `DATABASE_URL=postgres://... roster-seed`

use anyhow::{bail, Context};

use roster_api::config::ServerConfig;
use roster_api::state::open_store;
use roster_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = ServerConfig::from_env()?;
    if config.database_url.is_none() {
        bail!("DATABASE_URL must be set to seed the directory");
    }

    let store = open_store(&config).await?;
    let summary = roster_db::seed::seed_demo_data(store.as_ref())
        .await
        .context("Failed to seed demo data")?;

    tracing::info!(
        departments = summary.departments,
        employees = summary.employees,
        "Directory seeded"
    );

    store.close().await;
    Ok(())
}
