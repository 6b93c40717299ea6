//! Utility modules for error handling and configuration

pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{Result, YtEmbedError};
pub use paths::{get_config_dir, get_settings_path};
