//! Sampled forecast entries and series

use super::Condition;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How many forecast entries the API is asked for
pub const FORECAST_WINDOW: usize = 24;

/// Keep every Nth entry of the returned window. With a 24-entry window of
/// 3-hour steps this yields one sample approximately per day.
pub const SAMPLE_STRIDE: usize = 8;

/// One sampled forecast data point
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Local timestamp of the forecast slot
    pub timestamp: NaiveDateTime,
    /// Temperature in the requested unit system
    pub temperature: f64,
    /// Primary condition category
    pub condition: Condition,
    /// Human-readable description
    pub description: String,
}

/// Ordered sequence of sampled forecast entries
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    /// Build a series by keeping entries at indices 0, `stride`, 2*`stride`, …
    /// in their original order.
    #[must_use]
    pub fn sampled(entries: Vec<ForecastEntry>, stride: usize) -> Self {
        let entries = entries
            .into_iter()
            .enumerate()
            .filter(|(index, _)| index % stride == 0)
            .map(|(_, entry)| entry)
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
