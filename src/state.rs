//! Display state container
//!
//! One explicit container holds everything the display layer reads: the last
//! query, current conditions, the sampled forecast, the user-visible error and
//! the unit system. All mutation goes through small reducer-style transitions.
//!
//! Each fetch cycle gets a monotonically increasing generation token. A
//! response arriving with an older token lost the race against a newer fetch
//! and is discarded, so late completions can never overwrite newer state.

use crate::error::SkycastError;
use crate::models::{CurrentConditions, ForecastSeries, LocationQuery, UnitSystem};
use tracing::debug;

/// Process-wide display state
#[derive(Debug, Clone)]
pub struct WeatherState {
    /// Unit system for requests and display suffixes
    pub units: UnitSystem,
    /// Query of the most recent fetch cycle, in its original form
    pub query: Option<LocationQuery>,
    /// Current conditions from the last successful fetch
    pub current: Option<CurrentConditions>,
    /// Sampled forecast from the last successful forecast fetch
    pub forecast: Option<ForecastSeries>,
    /// User-visible error message, if the last action failed
    pub error: Option<String>,
    generation: u64,
}

impl WeatherState {
    #[must_use]
    pub fn new(units: UnitSystem) -> Self {
        Self {
            units,
            query: None,
            current: None,
            forecast: None,
            error: None,
            generation: 0,
        }
    }

    /// Record the query of a new fetch cycle and hand out its generation
    /// token. Any response still in flight for an earlier cycle becomes stale.
    pub fn begin_fetch(&mut self, query: LocationQuery) -> u64 {
        self.generation += 1;
        self.query = Some(query);
        self.generation
    }

    /// Token of the newest fetch cycle
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_stale(&self, token: u64) -> bool {
        token != self.generation
    }

    /// Apply the outcome of a current-conditions fetch.
    ///
    /// Success replaces the conditions wholesale and clears the error.
    /// Failure sets the error and clears the conditions; the forecast keeps
    /// whatever an earlier cycle produced.
    pub fn apply_current(&mut self, token: u64, result: Result<CurrentConditions, SkycastError>) {
        if self.is_stale(token) {
            debug!(token, current = self.generation, "Discarding stale current-conditions response");
            return;
        }

        match result {
            Ok(conditions) => {
                self.current = Some(conditions);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
                self.current = None;
            }
        }
    }

    /// Apply a successful forecast fetch. Forecast failures never reach the
    /// state; the caller logs and drops them.
    pub fn apply_forecast(&mut self, token: u64, series: ForecastSeries) {
        if self.is_stale(token) {
            debug!(token, current = self.generation, "Discarding stale forecast response");
            return;
        }

        self.forecast = Some(series);
    }

    /// Record a failure that happened before any request was issued
    /// (input validation, geolocation).
    pub fn apply_resolution_failure(&mut self, err: &SkycastError) {
        self.error = Some(err.user_message());
        // An empty search also blanks the conditions display; a refused
        // position fix leaves it showing the previous place.
        if matches!(err, SkycastError::Input { .. }) {
            self.current = None;
        }
    }

    /// Flip the unit system, touching nothing else. Returns the new value.
    pub fn toggle_units(&mut self) -> UnitSystem {
        self.units = self.units.toggled();
        self.units
    }
}
