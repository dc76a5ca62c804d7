#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_with_config, ensure_schema};

// Ensure the schema exists once across the entire test process
static SCHEMA: OnceCell<()> = OnceCell::const_new();

/// Fresh pool for the current test's runtime. Errors when `SKIP_DB_TESTS` is
/// set or the database is unreachable; callers treat that as "skip".
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        anyhow::bail!("SKIP_DB_TESTS is set");
    }
    let mut cfg = DatabaseConfig::from_env()?;
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 5;
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;

    SCHEMA
        .get_or_try_init(|| async { ensure_schema(&db).await })
        .await?;
    Ok(db)
}
