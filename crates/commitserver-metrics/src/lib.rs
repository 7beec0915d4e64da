//! Commit server metrics library.
//!
//! Owns the metrics registry the commit server reports into, the handler that
//! exposes it for scraping, and the wiring for a standalone exporter binary.
//! Host processes usually only need [`obs::MetricsServer`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;

pub use obs::MetricsServer;
