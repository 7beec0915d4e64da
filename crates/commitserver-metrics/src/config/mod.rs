//! Exporter config loader (strict parsing).

pub mod schema;

use std::{fs, io, path::Path};

use commitserver_core::error::{CommitServerError, Result};

pub use schema::{ExporterConfig, ServerSection};

/// Config file read when no path is given on the command line.
pub const DEFAULT_PATH: &str = "commitserver-metrics.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        CommitServerError::Config(format!("read {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(ExporterConfig::default())
        }
        Err(e) => Err(CommitServerError::Config(format!(
            "read {} failed: {e}",
            path.display()
        ))),
    }
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| CommitServerError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
