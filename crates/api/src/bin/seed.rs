//! Load the demo dataset into the database named by `DATABASE_URL`.
//!
//! Existing rows are wiped first. Migrations are applied before seeding so
//! the binary works against an empty database.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goat_db=info,goat_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = goat_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    goat_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = goat_db::seed::seed_demo_data(&pool)
        .await
        .context("Failed to seed demo data")?;

    tracing::info!(
        users = summary.users,
        clients = summary.clients,
        projects = summary.projects,
        tasks = summary.tasks,
        shoots = summary.shoots,
        leads = summary.leads,
        invoices = summary.invoices,
        expenses = summary.expenses,
        "Demo data seeded"
    );

    pool.close().await;
    Ok(())
}
