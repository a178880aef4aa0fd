//! Configuration error types for loading and parsing TOML config files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line index of the error (0 if unknown).
        line: usize,
        /// One-based column index of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// Path that was requested but does not exist.
        path: PathBuf,
    },

    /// A configuration file already exists at the target path.
    #[error("Configuration file already exists: {path}")]
    AlreadyExists {
        /// Path where the file already exists.
        path: PathBuf,
    },

    /// Failed to write a configuration file to disk.
    #[error("Failed to write configuration file: {path}")]
    WriteError {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A duration field does not parse as a humantime string.
    #[error("Invalid duration for {field}: {value:?}")]
    InvalidDuration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_read_error() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/etc/app/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("/etc/app/config.toml"),
            "ReadError display should include the path"
        );
        assert!(
            msg.contains("Failed to read"),
            "ReadError display should describe the failure"
        );
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("config.toml"),
            line: 5,
            column: 12,
            message: "expected `=`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("5:12"), "ParseError should include line:column");
        assert!(
            msg.contains("expected `=`"),
            "ParseError should include the message"
        );
    }

    #[test]
    fn display_not_found_error() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/missing/config.toml"),
        };
        assert!(err.to_string().contains("/missing/config.toml"));
    }

    #[test]
    fn display_already_exists_error() {
        let err = ConfigError::AlreadyExists {
            path: PathBuf::from("/home/user/.config/board-layout-panel/config.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("already exists"));
        assert!(msg.contains("config.toml"));
    }

    #[test]
    fn read_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = ConfigError::ReadError {
            path: PathBuf::from("/secret"),
            source: io_err,
        };
        // thiserror #[source] makes std::error::Error::source() return Some
        let source = std::error::Error::source(&err);
        assert!(source.is_some(), "ReadError should chain the I/O source");
    }

    #[test]
    fn display_invalid_duration() {
        let err = ConfigError::InvalidDuration {
            field: "tui.tick_rate",
            value: "fast".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tui.tick_rate"));
        assert!(msg.contains("fast"));
    }
}
