//! Axum router wiring for the exporter.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let path = state.cfg().server.metrics_path.clone();
    Router::new()
        .route(&path, state.metrics().handler())
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
