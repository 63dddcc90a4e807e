//! Display values cached for IDs.

use std::fmt;

/// Rendered for the reserved ID 0.
pub const NONE_NAME: &str = "None";
/// Rendered for IDs no probe could resolve.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Rendered for assets whose location is the origin, i.e. docked items.
pub const IN_HANGAR_NAME: &str = "In hangar or station";

/// What the cache holds for an ID.
///
/// Only [`DisplayName::Named`] is a real entity name; the other variants are display-only
/// outcomes that never map back to an ID.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayName {
    /// Canonical name reported by ESI.
    Named(String),
    /// Every probe failed or no session was available.
    Unknown,
    /// Asset located at the origin of its container.
    InHangar,
    /// Asset floating in space at these coordinates.
    Coordinates {
        /// X coordinate in meters.
        x: f64,
        /// Y coordinate in meters.
        y: f64,
        /// Z coordinate in meters.
        z: f64,
    },
}

impl DisplayName {
    /// Display value for an asset position, the origin means the item is docked.
    pub fn from_position(x: f64, y: f64, z: f64) -> Self {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            DisplayName::InHangar
        } else {
            DisplayName::Coordinates { x, y, z }
        }
    }

    /// Whether this is the "Unknown" sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, DisplayName::Unknown)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayName::Named(name) => f.write_str(name),
            DisplayName::Unknown => f.write_str(UNKNOWN_NAME),
            DisplayName::InHangar => f.write_str(IN_HANGAR_NAME),
            DisplayName::Coordinates { x, y, z } => write!(f, "({}, {}, {})", x, y, z),
        }
    }
}
