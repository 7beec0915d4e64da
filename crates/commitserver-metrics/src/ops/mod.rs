//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - metrics path (default `/metrics`) : Prometheus text format

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::obs::MetricsServer;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Render a scrape response. Read-only; safe to run alongside updates.
pub fn scrape(metrics: &MetricsServer) -> Response {
    match metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics scrape failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
