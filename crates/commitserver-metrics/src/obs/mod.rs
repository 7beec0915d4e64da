//! In-process metrics for the commit server.
//!
//! Instruments live in an isolated `prometheus::Registry` owned by
//! [`MetricsServer`]. Request handlers receive a clone of the server handle and
//! report through its update methods; the `/metrics` handler renders the
//! registry in Prometheus text format.

pub mod metrics;
pub mod runtime;

pub use metrics::{MetricsServer, PendingCommitGuard, DURATION_BUCKETS, NAMESPACE};
pub use runtime::RuntimeCollector;
