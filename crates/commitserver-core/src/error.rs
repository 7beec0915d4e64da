//! Shared error type across commitserver crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, CommitServerError>;

/// Unified error type used by core and metrics.
#[derive(Debug, Error)]
pub enum CommitServerError {
    /// An instrument or collector could not be registered (usually a name
    /// collision). Startup must not continue past this.
    #[error("metric registration failed: {0}")]
    Registration(String),
    /// Snapshot could not be serialized to exposition text.
    #[error("metric encoding failed: {0}")]
    Encode(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CommitServerError {
    /// True for errors that must abort process startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CommitServerError::Registration(_) | CommitServerError::Config(_))
    }
}
