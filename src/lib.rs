//! `skycast` - weather lookup for a typed place or the device position
//!
//! This library resolves a user-supplied location, fetches current conditions
//! and a short sampled forecast from OpenWeatherMap, and maintains the
//! display state the frontend renders from.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod state;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use app::WeatherApp;
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use location::{DevicePosition, GeolocationProvider, LocationResolver};
pub use models::{
    Condition, CurrentConditions, ForecastEntry, ForecastSeries, Icon, LocationQuery, UnitSystem,
};
pub use state::WeatherState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
