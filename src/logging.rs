//! Logging initialization for the board layout panel.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `BLP_LOG` environment variable, falling back to the configured level
//! when the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (config [log] level)
//! blp tui
//!
//! # Debug level
//! BLP_LOG=debug blp tui
//!
//! # Module-specific filtering
//! BLP_LOG=board_layout_panel=debug,warn blp tui
//! ```

use crate::config::schema::LogConfig;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads the `BLP_LOG` environment variable for filter directives, falling
/// back to the configured `[log] level`. Output goes to the configured log
/// file, or stderr when none is set. While the TUI holds the alternate
/// screen, stderr output is invisible until exit; a log file keeps the
/// driver poller's output observable.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("BLP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let builder = fmt().with_env_filter(filter).with_target(false);

    if config.file.is_empty() {
        builder.with_writer(std::io::stderr).init();
        return;
    }

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
    {
        Ok(file) => {
            builder.with_writer(Arc::new(file)).with_ansi(false).init();
        }
        Err(e) => {
            // Fall back to stderr rather than refusing to start.
            builder.with_writer(std::io::stderr).init();
            tracing::warn!("could not open log file {}: {}", config.file, e);
        }
    }
}
