use anyhow::{anyhow, Context};
use clubhouse_utils::error::ClubhouseResult;
use diesel::Connection;
use diesel_async::{async_connection_wrapper::AsyncConnectionWrapper, AsyncPgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Runs pending migrations. Migrations are synchronous, so they run on a blocking thread through
/// a wrapped async connection.
pub async fn run(db_url: &str) -> ClubhouseResult<()> {
  let db_url = db_url.to_string();
  tokio::task::spawn_blocking(move || -> ClubhouseResult<()> {
    let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&db_url)
      .with_context(|| "Error connecting to database")?;

    info!("Running Database migrations (This may take a long time)...");
    conn
      .run_pending_migrations(MIGRATIONS)
      .map_err(|e| anyhow!("Couldn't run DB Migrations: {e}"))?;
    info!("Database migrations complete.");
    Ok(())
  })
  .await?
}
