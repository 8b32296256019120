//! Data models for the skycast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: place queries sent to the weather API
//! - Condition: weather condition categories and display selectors
//! - Weather: current conditions and unit system handling
//! - Forecast: sampled forecast entries and series

pub mod condition;
pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use condition::{Condition, Icon};
pub use forecast::{ForecastEntry, ForecastSeries};
pub use location::LocationQuery;
pub use weather::{CurrentConditions, UnitSystem};
