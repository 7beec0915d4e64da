//! commitserver core: error surface and metric label vocabularies.
//!
//! Shared by the metrics library and anything that reports into it. It
//! carries no runtime or HTTP dependencies so request handlers can name label
//! values without pulling in the exporter stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod labels;

/// Shared result type.
pub use error::{CommitServerError, Result};
pub use labels::{CommitResponseType, GitRequestType};
