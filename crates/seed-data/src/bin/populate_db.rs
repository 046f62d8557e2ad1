//! Resets the database and populates it with sample data.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin populate_db
//! ```
//!
//! Set `OCTOFIT_SEED` to an integer for a reproducible data set.

use std::sync::Arc;

use octofit::{config::Config, database, database::Database};
use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = database::connect(&config.database_url).await?;

    tracing::info!("Connected to database");

    let mut seed_config = SeedConfig::default();
    if let Ok(raw) = std::env::var("OCTOFIT_SEED") {
        let seed = raw
            .parse()
            .map_err(|_| anyhow::anyhow!("OCTOFIT_SEED must be an integer, got {raw:?}"))?;
        seed_config = seed_config.with_seed(seed);
    }

    let mut rng = seed_config.rng();
    let seeder = Seeder::with_config(Arc::new(Database::new(pool)), seed_config);
    let summary = seeder.populate(&mut rng).await?;

    tracing::info!("Teams: {}", summary.teams);
    tracing::info!("Users: {}", summary.users);
    tracing::info!("Activities: {}", summary.activities);
    tracing::info!("Leaderboard entries: {}", summary.leaderboard);
    tracing::info!("Workouts: {}", summary.workouts);

    Ok(())
}
