//! commitserver-metrics exporter
//!
//! Serves the commit server registry over HTTP:
//! - metrics path from config (default `/metrics`)
//! - `/healthz`
//!
//! Usage: `commitserver-metrics [config.yaml]`

use std::process::ExitCode;

use commitserver_core::error::{CommitServerError, Result};
use tracing_subscriber::{fmt, EnvFilter};

use commitserver_metrics::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, fatal = e.is_fatal(), "commitserver-metrics exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;
    let metrics_path = cfg.server.metrics_path.clone();

    // Registration conflicts surface here and abort startup.
    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| CommitServerError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, %metrics_path, "commitserver-metrics starting");

    axum::serve(listener, app)
        .await
        .map_err(|e| CommitServerError::Internal(format!("server failed: {e}")))
}
