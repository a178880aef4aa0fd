//! Platform-aware path resolution for board-layout-panel.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/board-layout-panel` or `~/.config/board-layout-panel`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/board-layout-panel` or
//!   `~/Library/Application Support/board-layout-panel`

use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "board-layout-panel";

/// Returns the configuration directory for board-layout-panel.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/board-layout-panel` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/board-layout-panel`
///    - macOS: `~/Library/Application Support/board-layout-panel`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Creates the configuration directory if it does not exist.
pub fn ensure_config_dir() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())
}
