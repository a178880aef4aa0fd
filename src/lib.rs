//! Board Layout Panel library
//!
//! This crate provides the layout configuration panel for a chess-variant
//! game: built-in board presets, an editable panel component, and the
//! polled accessor surface an external game driver consumes.
//!
//! # Architecture
//!
//! - [`presets`]: built-in placement/promotion diagram library
//! - [`panel`]: the panel component (state, event reducer, shared handle)
//! - [`driver`]: cloneable accessor handle for the external game driver
//! - [`tui`]: ratatui terminal front end
//! - [`config`]: TOML configuration and XDG path resolution
//!
//! Diagram strings are opaque to this crate: they are stored, edited, and
//! handed to the driver verbatim, never parsed or validated here.

use std::fmt;
use std::str::FromStr;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Driver-facing accessor handle.
pub mod driver;

/// Logging initialization.
pub mod logging;

/// Panel component: state, events, shared handle, restart latch.
pub mod panel;

/// Built-in layout preset diagrams.
pub mod presets;

/// TUI module providing the terminal front end for the panel.
pub mod tui;

/// Layout name enumeration.
///
/// Keys both diagram mappings. Six built-in presets plus a free-form
/// `custom` entry that starts empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutName {
    /// Classic two-rank setup on an 8x8 board.
    Standard,
    /// Standard setup with a 2x2 hole in the middle of the board.
    Hole,
    /// Shortened board, armies start closer together.
    Closeup,
    /// Lengthened board, armies start further apart.
    Marathon,
    /// Doubled back ranks on a ten-rank board.
    Double,
    /// Central wall of holes with a two-file passage.
    SecretPassage,
    /// User-authored layout, starts empty.
    Custom,
}

impl LayoutName {
    /// All layout names in selector display order, built-ins first.
    pub const ALL: [LayoutName; 7] = [
        LayoutName::Standard,
        LayoutName::Hole,
        LayoutName::Closeup,
        LayoutName::Marathon,
        LayoutName::Double,
        LayoutName::SecretPassage,
        LayoutName::Custom,
    ];

    /// The built-in names that carry preset diagrams (everything but `custom`).
    pub const BUILT_IN: [LayoutName; 6] = [
        LayoutName::Standard,
        LayoutName::Hole,
        LayoutName::Closeup,
        LayoutName::Marathon,
        LayoutName::Double,
        LayoutName::SecretPassage,
    ];
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayoutName::Standard => "standard",
            LayoutName::Hole => "hole",
            LayoutName::Closeup => "closeup",
            LayoutName::Marathon => "marathon",
            LayoutName::Double => "double",
            LayoutName::SecretPassage => "secret_passage",
            LayoutName::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing LayoutName from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutNameError(pub String);

impl fmt::Display for ParseLayoutNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid layout name: {}", self.0)
    }
}

impl std::error::Error for ParseLayoutNameError {}

impl FromStr for LayoutName {
    type Err = ParseLayoutNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(LayoutName::Standard),
            "hole" => Ok(LayoutName::Hole),
            "closeup" => Ok(LayoutName::Closeup),
            "marathon" => Ok(LayoutName::Marathon),
            "double" => Ok(LayoutName::Double),
            "secret_passage" => Ok(LayoutName::SecretPassage),
            "custom" => Ok(LayoutName::Custom),
            _ => Err(ParseLayoutNameError(s.to_string())),
        }
    }
}

/// Which color is rendered at the bottom of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// White at the bottom (default).
    #[default]
    White,
    /// Black at the bottom.
    Black,
}

impl Side {
    /// Returns the opposite side.
    pub fn flipped(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::White => "white",
            Side::Black => "black",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing Side from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(pub String);

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid side: {}", self.0)
    }
}

impl std::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" => Ok(Side::White),
            "black" => Ok(Side::Black),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}
