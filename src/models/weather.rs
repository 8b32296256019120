//! Current weather data and unit system handling

use super::Condition;
use serde::{Deserialize, Serialize};

/// Measurement convention for API requests and display suffixes
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, metres per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl UnitSystem {
    /// The opposite unit system. Toggling twice returns the original value.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Value of the API `units` request parameter
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Display suffix for temperatures
    #[must_use]
    pub fn temperature_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Display suffix for wind speeds
    #[must_use]
    pub fn wind_speed_suffix(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

/// Normalized current weather for one place
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Place name as reported by the API
    pub place: String,
    /// Primary condition category
    pub condition: Condition,
    /// Human-readable description, e.g. "light rain"
    pub description: String,
    /// Temperature in the requested unit system
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in the requested unit system
    pub wind_speed: f64,
}

impl CurrentConditions {
    /// Format temperature with the unit suffix
    #[must_use]
    pub fn format_temperature(&self, units: UnitSystem) -> String {
        format!("{}{}", self.temperature, units.temperature_suffix())
    }

    /// Format wind speed with the unit suffix
    #[must_use]
    pub fn format_wind(&self, units: UnitSystem) -> String {
        format!("{} {}", self.wind_speed, units.wind_speed_suffix())
    }
}
