//! Application driver
//!
//! Sequences one user action into state transitions: resolve the input, fetch
//! current conditions, and only when that succeeds kick off the forecast
//! fetch in the background. The caller gets control back without waiting for
//! the forecast; it lands in the state whenever it arrives, unless a newer
//! fetch cycle has made it stale.

use crate::api::WeatherApiClient;
use crate::config::SkycastConfig;
use crate::error::SkycastError;
use crate::location::{GeolocationProvider, LocationResolver};
use crate::models::LocationQuery;
use crate::state::WeatherState;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::warn;

/// Owns the API client and the display state, and runs fetch cycles
pub struct WeatherApp {
    client: Arc<WeatherApiClient>,
    state: Arc<Mutex<WeatherState>>,
    forecast_task: Option<JoinHandle<()>>,
}

impl WeatherApp {
    /// Build the app from configuration
    pub fn new(config: SkycastConfig) -> Result<Self, SkycastError> {
        let client = WeatherApiClient::new(config.weather)?;
        Ok(Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(WeatherState::new(config.defaults.units))),
            forecast_task: None,
        })
    }

    /// A copy of the display state as of now
    pub async fn snapshot(&self) -> WeatherState {
        self.state.lock().await.clone()
    }

    /// Run a fetch cycle for typed search text. Errors land in the state's
    /// error field; nothing is surfaced to the caller directly.
    pub async fn search(&mut self, input: &str) {
        match LocationResolver::resolve_text(input) {
            Ok(query) => self.run_fetch_cycle(query).await,
            Err(err) => self.state.lock().await.apply_resolution_failure(&err),
        }
    }

    /// Run a fetch cycle for the device position
    pub async fn locate(&mut self, provider: Option<&dyn GeolocationProvider>) {
        match LocationResolver::resolve_device(provider) {
            Ok(query) => self.run_fetch_cycle(query).await,
            Err(err) => self.state.lock().await.apply_resolution_failure(&err),
        }
    }

    /// Flip the unit system and re-run the recorded query, if any, in its
    /// original form. A coordinate search stays coordinate-keyed.
    pub async fn toggle_units(&mut self) {
        let query = {
            let mut state = self.state.lock().await;
            state.toggle_units();
            state.query.clone()
        };

        if let Some(query) = query {
            self.run_fetch_cycle(query).await;
        }
    }

    /// Fetch current conditions, then start the forecast fetch in the
    /// background. Both requests use the same location form and the same
    /// generation token, so a superseded cycle's responses are discarded on
    /// arrival.
    async fn run_fetch_cycle(&mut self, query: LocationQuery) {
        let (token, units) = {
            let mut state = self.state.lock().await;
            (state.begin_fetch(query.clone()), state.units)
        };

        let result = self.client.fetch_current(&query, units).await;
        let fetched = result.is_ok();
        self.state.lock().await.apply_current(token, result);

        if fetched {
            let client = Arc::clone(&self.client);
            let state = Arc::clone(&self.state);
            let handle = tokio::spawn(async move {
                match client.fetch_forecast(&query, units).await {
                    Ok(series) => state.lock().await.apply_forecast(token, series),
                    // Forecast failures are logged, never displayed; the
                    // previous forecast stays on screen.
                    Err(err) => warn!("Forecast fetch failed: {err}"),
                }
            });
            self.forecast_task = Some(handle);
        }
    }

    /// Wait for the in-flight forecast fetch, if any. The interactive flow
    /// never calls this; the CLI does before printing, and tests do to get a
    /// settled state.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.forecast_task.take() {
            let _ = handle.await;
        }
    }
}
