//! Settings path resolution
//!
//! Settings live in the platform config directory:
//! - Linux: `$XDG_CONFIG_HOME/ytembed/` or `~/.config/ytembed/`
//! - macOS: `~/Library/Application Support/ytembed/`
//! - Windows: `%APPDATA%\ytembed\`

use std::path::PathBuf;
use tracing::{debug, warn};

const APP_DIR: &str = "ytembed";
const SETTINGS_FILE: &str = "settings.json";

/// Get the configuration directory for ytembed.
///
/// Falls back to `~/.ytembed` and finally to a relative `.ytembed` when the
/// platform lookup fails. The directory is not created here.
pub fn get_config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .map(|base| base.join(APP_DIR))
        .or_else(|| dirs::home_dir().map(|home| home.join(format!(".{}", APP_DIR))))
        .unwrap_or_else(|| {
            warn!("Could not determine config directory, using ./.{}", APP_DIR);
            PathBuf::from(format!(".{}", APP_DIR))
        });

    debug!("Config directory: {:?}", dir);
    dir
}

/// Get the settings file path.
///
/// Returns: `<config dir>/ytembed/settings.json`
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE)
}
