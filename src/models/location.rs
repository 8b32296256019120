//! Location query model for the weather API

use serde::{Deserialize, Serialize};
use std::fmt;

/// A place to look up weather for. Exactly one form is active at a time,
/// chosen by the triggering user action.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum LocationQuery {
    /// Free-text place name, e.g. "Paris" or "New York City"
    Name(String),
    /// Device-reported coordinates in decimal degrees
    Coordinates { latitude: f64, longitude: f64 },
}

impl LocationQuery {
    /// Create a name query
    #[must_use]
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    /// Create a coordinate query
    #[must_use]
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self::Coordinates {
            latitude,
            longitude,
        }
    }

    /// Short label for log output
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Coordinates {
                latitude,
                longitude,
            } => format!("{latitude:.4}, {longitude:.4}"),
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
