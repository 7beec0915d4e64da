//! Commit server metrics registry.
//!
//! Every instrument is a labeled vector: a series is created the first time a
//! label combination is used and lives until the process exits. Label values
//! are recorded as given. Callers must keep the set of distinct `repo` values
//! bounded, since each one is a new series held in memory forever.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, MethodRouter};
use commitserver_core::error::{CommitServerError, Result};
use prometheus::core::Collector;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry,
    TextEncoder,
};

use super::runtime::RuntimeCollector;
use crate::ops;

/// Prefix shared by all domain instruments.
pub const NAMESPACE: &str = "argocd_commitserver";

/// Upper bounds (seconds) for git and commit request duration histograms.
pub const DURATION_BUCKETS: [f64; 8] = [0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 10.0, 20.0];

/// Metrics registry handle. Cheap to clone; all clones share one registry.
#[derive(Clone)]
pub struct MetricsServer {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    commit_pending_requests: IntGaugeVec,
    git_requests: IntCounterVec,
    git_request_duration: HistogramVec,
    commit_request_duration: HistogramVec,
    commit_requests: IntCounterVec,
}

impl MetricsServer {
    /// Build a fresh registry with process and runtime collectors plus the
    /// commit server instruments.
    ///
    /// A name collision is a programming error; the caller must treat the
    /// returned `Registration` error as fatal.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        #[cfg(target_os = "linux")]
        register(
            &registry,
            prometheus::process_collector::ProcessCollector::for_self(),
        )?;

        let runtime = RuntimeCollector::new()
            .map_err(|e| CommitServerError::Registration(format!("runtime collector: {e}")))?;
        register(&registry, runtime)?;

        Self::with_registry(registry)
    }

    /// Register the commit server instruments into an existing registry.
    pub fn with_registry(registry: Registry) -> Result<Self> {
        let commit_pending_requests = IntGaugeVec::new(
            Opts::new(
                "commit_pending_request_total",
                "Number of pending commit requests",
            )
            .namespace(NAMESPACE),
            &["repo"],
        )
        .map_err(opts_err)?;
        register(&registry, commit_pending_requests.clone())?;

        let git_requests = IntCounterVec::new(
            Opts::new(
                "git_request_total",
                "Number of git requests performed by repo server",
            )
            .namespace(NAMESPACE),
            &["repo", "request_type"],
        )
        .map_err(opts_err)?;
        register(&registry, git_requests.clone())?;

        let git_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "git_request_duration_seconds",
                "Git requests duration seconds.",
            )
            .namespace(NAMESPACE)
            .buckets(DURATION_BUCKETS.to_vec()),
            &["repo", "request_type"],
        )
        .map_err(opts_err)?;
        register(&registry, git_request_duration.clone())?;

        let commit_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "commit_request_duration_seconds",
                "Commit request duration seconds.",
            )
            .namespace(NAMESPACE)
            .buckets(DURATION_BUCKETS.to_vec()),
            &["repo", "response_type"],
        )
        .map_err(opts_err)?;
        register(&registry, commit_request_duration.clone())?;

        let commit_requests = IntCounterVec::new(
            Opts::new(
                "commit_request_total",
                "Number of commit requests performed handled",
            )
            .namespace(NAMESPACE),
            &["repo", "response_type"],
        )
        .map_err(opts_err)?;
        register(&registry, commit_requests.clone())?;

        tracing::debug!(namespace = NAMESPACE, "commit server metrics registered");

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                commit_pending_requests,
                git_requests,
                git_request_duration,
                commit_request_duration,
                commit_requests,
            }),
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// HTTP GET handler serving the current snapshot. Mount it at any path.
    pub fn handler<S>(&self) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let metrics = self.clone();
        get(move || {
            let metrics = metrics.clone();
            async move { ops::scrape(&metrics) }
        })
    }

    /// Serialize every series in the registry as Prometheus text.
    pub fn render(&self) -> Result<String> {
        let families = self.inner.registry.gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(|e| CommitServerError::Encode(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| CommitServerError::Encode(e.to_string()))
    }

    pub fn inc_pending_commit_request(&self, repo: &str) {
        self.inner
            .commit_pending_requests
            .with_label_values(&[repo])
            .inc();
    }

    pub fn dec_pending_commit_request(&self, repo: &str) {
        self.inner
            .commit_pending_requests
            .with_label_values(&[repo])
            .dec();
    }

    /// Increment the pending gauge for `repo` and decrement it when the
    /// returned guard is dropped.
    pub fn track_pending_commit_request(&self, repo: &str) -> PendingCommitGuard {
        let gauge = self.inner.commit_pending_requests.with_label_values(&[repo]);
        gauge.inc();
        PendingCommitGuard { gauge }
    }

    /// Increment the git request counter.
    pub fn inc_git_request(&self, repo: &str, request_type: impl AsRef<str>) {
        self.inner
            .git_requests
            .with_label_values(&[repo, request_type.as_ref()])
            .inc();
    }

    pub fn observe_git_request_duration(
        &self,
        repo: &str,
        request_type: impl AsRef<str>,
        duration: Duration,
    ) {
        self.inner
            .git_request_duration
            .with_label_values(&[repo, request_type.as_ref()])
            .observe(duration.as_secs_f64());
    }

    pub fn observe_commit_request_duration(
        &self,
        repo: &str,
        response_type: impl AsRef<str>,
        duration: Duration,
    ) {
        self.inner
            .commit_request_duration
            .with_label_values(&[repo, response_type.as_ref()])
            .observe(duration.as_secs_f64());
    }

    pub fn inc_commit_request(&self, repo: &str, response_type: impl AsRef<str>) {
        self.inner
            .commit_requests
            .with_label_values(&[repo, response_type.as_ref()])
            .inc();
    }
}

/// Decrements the pending commit gauge on drop.
#[must_use = "dropping the guard immediately ends the pending request"]
pub struct PendingCommitGuard {
    gauge: IntGauge,
}

impl Drop for PendingCommitGuard {
    fn drop(&mut self) {
        self.gauge.dec();
    }
}

fn register<C>(registry: &Registry, collector: C) -> Result<()>
where
    C: Collector + 'static,
{
    registry
        .register(Box::new(collector))
        .map_err(|e| CommitServerError::Registration(e.to_string()))
}

fn opts_err(e: prometheus::Error) -> CommitServerError {
    CommitServerError::Registration(format!("invalid instrument definition: {e}"))
}
