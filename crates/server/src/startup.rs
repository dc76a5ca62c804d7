use std::sync::Arc;

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat, LoggingConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};
use service::SeaOrmChequeRepository;

/// Initialize logging via shared common utils, in the configured format.
pub fn init_logging(cfg: &LoggingConfig) {
    match cfg.format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

/// Any origin, method and header.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(service = "server", event = "shutdown_signal", "shutdown requested, draining connections");
}

/// Open the pool, ensure the schema, and serve until a shutdown signal.
/// The pool is closed once in-flight requests have drained.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::ensure_schema(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let state = ServerState::new(Arc::new(SeaOrmChequeRepository::new(db.clone())));
    let app: Router = routes::build_router(state, build_cors());

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}:{}: {e}", cfg.server.host, cfg.server.port)))?;
    let addr = listener.local_addr()?;
    info!(service = "server", event = "listening", %addr, "cheque api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!(service = "server", event = "pool_closed", "database pool closed");
    Ok(())
}
