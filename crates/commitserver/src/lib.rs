//! Top-level facade crate for the commit server metrics stack.
//!
//! Re-exports core types and the metrics library so users can depend on a single crate.

pub mod core {
    pub use commitserver_core::*;
}

pub mod metrics {
    pub use commitserver_metrics::*;
}
