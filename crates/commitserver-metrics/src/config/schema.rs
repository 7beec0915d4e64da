use std::net::SocketAddr;

use serde::Deserialize;
use commitserver_core::error::{CommitServerError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CommitServerError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.metrics_path.starts_with('/') {
            return Err(CommitServerError::Config(
                "server.metrics_path must start with '/'".into(),
            ));
        }
        if self.metrics_path == "/healthz" {
            return Err(CommitServerError::Config(
                "server.metrics_path must not shadow /healthz".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            CommitServerError::Config(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8087".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
