//! Weather condition categories and their display selectors

use serde::{Deserialize, Serialize};

/// Primary weather condition category, taken from the first entry of the
/// API's `weather` array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    /// Any category the display layer has no dedicated treatment for.
    /// Renders with the `Clear` selectors.
    Other(String),
}

/// Icon selector for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Cloud,
    CloudRain,
}

impl Icon {
    /// Stable selector name the display layer keys on
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Cloud => "cloud",
            Self::CloudRain => "cloud-rain",
        }
    }
}

impl Condition {
    /// Classify a condition label. Total: every input maps to a category.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            other => Self::Other(other.to_string()),
        }
    }

    /// Icon selector for this condition
    #[must_use]
    pub fn icon(&self) -> Icon {
        match self {
            Self::Clear | Self::Other(_) => Icon::Sun,
            Self::Clouds => Icon::Cloud,
            Self::Rain => Icon::CloudRain,
        }
    }

    /// Background theme class for this condition
    #[must_use]
    pub fn theme(&self) -> &'static str {
        match self {
            Self::Clear | Self::Other(_) => "clear-bg",
            Self::Clouds => "cloudy-bg",
            Self::Rain => "rainy-bg",
        }
    }
}
