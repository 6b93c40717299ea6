//! Application configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, info};

use super::error::{Result, YtEmbedError};

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Interface the server listens on
    pub host: String,

    /// Listening port (0 picks a free one)
    pub port: u16,

    /// Open the page in the default browser once the server is up
    pub open_browser: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            open_browser: false,
        }
    }
}

impl AppSettings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Resolve host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if self.host.trim().is_empty() {
            return Err(YtEmbedError::ConfigError("host must not be empty".to_string()));
        }
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| YtEmbedError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}
