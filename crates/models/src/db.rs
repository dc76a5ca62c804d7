use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::{cheque, errors::ModelError};

/// Open the shared connection pool described by `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.connection_url());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(host = %cfg.host, database = %cfg.name, max_connections = cfg.max_connections, "database pool ready");
    Ok(db)
}

/// Create the `cheques` table and its indexes when they are missing.
/// Safe to run on every startup.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(cheque::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(cheque::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }
    info!(table = "cheques", "schema ensured");
    Ok(())
}
