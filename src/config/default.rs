//! Default configuration template and file creation utilities.
//!
//! Provides a well-commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A well-commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// Sections: `[panel]`, `[tui]`, `[driver]`, `[log]`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Board Layout Panel Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
# Uncomment and modify options to customize the panel.
#
# Location: $XDG_CONFIG_HOME/board-layout-panel/config.toml

# ==============================================================================
# Panel Configuration
# ==============================================================================

[panel]

# Layout selected when the panel opens.
# Options: "standard", "hole", "closeup", "marathon", "double",
#          "secret_passage", "custom"
initial_layout = "standard"

# Side rendered at the bottom of the board.
# Options: "white", "black"
bottom_side = "white"

# ==============================================================================
# TUI Configuration
# ==============================================================================

[tui]

# Render tick rate as a human-readable duration.
# Controls how often the TUI redraws on idle. Lower values = smoother but
# more CPU. Input events always render immediately.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# ==============================================================================
# Driver Configuration
# ==============================================================================

[driver]

# Run the demonstration driver poller alongside the TUI. The poller consumes
# restart requests and logs them, the way an embedding game driver would.
enabled = true

# Poll cadence as a human-readable duration. "16ms" is one 60fps frame.
# Examples: "16ms", "33ms", "100ms"
poll_interval = "16ms"

# ==============================================================================
# Logging Configuration
# ==============================================================================

[log]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Path to log file. Empty string means log to stderr.
# While the TUI is running, stderr is hidden by the alternate screen; set a
# file path here to capture driver poller output.
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path: path.clone() });
        }
        // Back up existing file
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs.
fn write_default_config(path: &PathBuf) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;
    use serial_test::serial;

    /// Run closure with `XDG_CONFIG_HOME` temporarily pointed at `dir`.
    fn with_xdg_config<F: FnOnce()>(dir: &str, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", dir) };
        f();
        match original {
            Some(v) => unsafe { std::env::set_var("XDG_CONFIG_HOME", v) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }
    }

    #[test]
    fn template_matches_schema_defaults() {
        let parsed: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    #[serial]
    fn create_writes_file_at_config_path() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path().to_str().expect("non-utf8 path"), || {
            let path = create_default_config(false).expect("should create");
            assert!(path.ends_with("board-layout-panel/config.toml"));
            let written = fs::read_to_string(&path).expect("should read back");
            assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
        });
    }

    #[test]
    #[serial]
    fn create_without_force_fails_when_file_exists() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path().to_str().expect("non-utf8 path"), || {
            create_default_config(false).expect("first create should succeed");
            let err = create_default_config(false).expect_err("second create should fail");
            assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        });
    }

    #[test]
    #[serial]
    fn create_with_force_backs_up_existing_file() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path().to_str().expect("non-utf8 path"), || {
            let path = create_default_config(false).expect("first create should succeed");
            fs::write(&path, "# customized\n").expect("should overwrite");

            create_default_config(true).expect("forced create should succeed");

            let backup = path.with_extension("toml.backup");
            assert_eq!(
                fs::read_to_string(backup).expect("backup should exist"),
                "# customized\n"
            );
            assert_eq!(
                fs::read_to_string(&path).expect("config should exist"),
                DEFAULT_CONFIG_TEMPLATE
            );
        });
    }
}
