//! TOML configuration schema types for the board layout panel.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"16ms"`)
//! parsed by the `humantime` crate through the accessor methods below.

use crate::config::error::ConfigError;
use crate::{LayoutName, Side};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [panel]
/// [tui]
/// [driver]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Panel startup settings.
    pub panel: PanelConfig,
    /// TUI behavior settings.
    pub tui: TuiConfig,
    /// Driver poller settings.
    pub driver: DriverConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Panel startup configuration from the `[panel]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Layout selected when the panel opens.
    pub initial_layout: LayoutName,
    /// Side rendered at the bottom of the board.
    pub bottom_side: Side,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_layout: LayoutName::Standard,
            bottom_side: Side::White,
        }
    }
}

/// TUI configuration from the `[tui]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parses `tick_rate` into a `Duration`.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        parse_duration("tui.tick_rate", &self.tick_rate)
    }
}

/// Driver poller configuration from the `[driver]` section.
///
/// The TUI binary runs a background task that polls the driver handle the
/// way an embedding game driver would, once per interval.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    /// Whether the demonstration poller task runs at all.
    pub enabled: bool,
    /// Poll cadence as a human-readable duration (default one 60fps frame).
    pub poll_interval: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval: "16ms".to_string(),
        }
    }
}

impl DriverConfig {
    /// Parses `poll_interval` into a `Duration`.
    pub fn poll_interval(&self) -> Result<Duration, ConfigError> {
        parse_duration("driver.poll_interval", &self.poll_interval)
    }
}

/// Logging configuration from the `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The tracing filter directive equivalent.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn parse_duration(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|_| ConfigError::InvalidDuration {
        field,
        value: value.to_string(),
    })
}
