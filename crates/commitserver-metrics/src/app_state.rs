//! Shared application state for the metrics exporter.

use std::sync::Arc;

use commitserver_core::error::Result;

use crate::config::ExporterConfig;
use crate::obs::MetricsServer;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: MetricsServer,
}

struct AppStateInner {
    cfg: ExporterConfig,
}

impl AppState {
    /// Build application state with a freshly registered metrics registry.
    /// A registration conflict is returned so main can abort startup.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let metrics = MetricsServer::new()?;
        Ok(Self::with_metrics(cfg, metrics))
    }

    pub fn with_metrics(cfg: ExporterConfig, metrics: MetricsServer) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &MetricsServer {
        &self.metrics
    }
}
