//! Weather API client for OpenWeatherMap
//!
//! This module provides HTTP client functionality for retrieving current
//! conditions and short forecasts. The API reports failures inside the
//! response body (`cod`/`message`), not only through the transport status,
//! so both layers are checked before data is handed to the caller.

use crate::config::WeatherConfig;
use crate::error::SkycastError;
use crate::models::forecast::{FORECAST_WINDOW, SAMPLE_STRIDE};
use crate::models::{CurrentConditions, ForecastSeries, LocationQuery, UnitSystem};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Message shown when the API gives us nothing better
pub const FALLBACK_FETCH_MESSAGE: &str = "Location not found";

/// Weather API client for OpenWeatherMap
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: WeatherConfig) -> Result<Self, SkycastError> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get current conditions for a location. One outbound call, no retry.
    #[instrument(skip(self, query), fields(query = %query.label()))]
    pub async fn fetch_current(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<CurrentConditions, SkycastError> {
        let url = format!(
            "{}/weather?{}&units={}&appid={}",
            self.config.base_url,
            location_params(query),
            units.api_value(),
            self.config.api_key
        );

        let body = self.get_body(&url).await?;
        let conditions = openweather::decode_current(&body)?;

        info!(place = %conditions.place, "Retrieved current conditions");
        Ok(conditions)
    }

    /// Get the sampled short forecast for a location. The API is asked for a
    /// fixed window of entries; every 8th one is kept. One outbound call, no
    /// retry.
    #[instrument(skip(self, query), fields(query = %query.label()))]
    pub async fn fetch_forecast(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<ForecastSeries, SkycastError> {
        let url = format!(
            "{}/forecast?{}&units={}&cnt={}&appid={}",
            self.config.base_url,
            location_params(query),
            units.api_value(),
            FORECAST_WINDOW,
            self.config.api_key
        );

        let body = self.get_body(&url).await?;
        let series = openweather::decode_forecast(&body)?;

        info!(entries = series.len(), "Retrieved forecast");
        Ok(series)
    }

    /// Issue a single GET and return the raw body. Non-success transport
    /// statuses still carry a JSON body with `cod`/`message`, so the body is
    /// read regardless of status and decoding decides the outcome.
    async fn get_body(&self, url: &str) -> Result<String, SkycastError> {
        debug!(url = %redact_credential(url), "Requesting weather API");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Transport failure: {e}");
            SkycastError::fetch(FALLBACK_FETCH_MESSAGE)
        })?;

        response.text().await.map_err(|e| {
            warn!("Failed to read response body: {e}");
            SkycastError::fetch(FALLBACK_FETCH_MESSAGE)
        })
    }
}

/// Request parameters identifying the place: name or coordinate form
fn location_params(query: &LocationQuery) -> String {
    match query {
        LocationQuery::Name(name) => format!("q={}", urlencoding::encode(name)),
        LocationQuery::Coordinates {
            latitude,
            longitude,
        } => format!("lat={latitude}&lon={longitude}"),
    }
}

/// The API credential must never reach the logs
fn redact_credential(url: &str) -> &str {
    url.split("appid=").next().unwrap_or(url)
}

/// OpenWeatherMap response structures and decoding
mod openweather {
    use super::{FALLBACK_FETCH_MESSAGE, SAMPLE_STRIDE};
    use crate::error::SkycastError;
    use crate::models::{Condition, CurrentConditions, ForecastEntry, ForecastSeries};
    use chrono::{NaiveDateTime, Utc};
    use serde::Deserialize;
    use tracing::debug;

    /// Body-embedded status code. The API sends a number on success and a
    /// string on error bodies.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum Cod {
        Number(u16),
        Text(String),
    }

    impl Cod {
        fn is_success(&self) -> bool {
            match self {
                Cod::Number(code) => *code == 200,
                Cod::Text(code) => code == "200",
            }
        }
    }

    /// Minimal view of any response body, used to check the embedded status
    /// before the full shape is parsed. `message` is a string on error bodies
    /// but a number on some success bodies, so it is probed as a raw value.
    #[derive(Debug, Deserialize)]
    struct StatusProbe {
        cod: Option<Cod>,
        message: Option<serde_json::Value>,
    }

    /// Current weather response from the `/weather` endpoint
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        pub weather: Vec<ConditionEntry>,
        pub main: MainReadings,
        pub wind: WindReadings,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionEntry {
        pub main: String,
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        pub temp: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindReadings {
        pub speed: f64,
    }

    /// Forecast response from the `/forecast` endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastSlot>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastSlot {
        pub dt_txt: String,
        pub main: SlotReadings,
        pub weather: Vec<ConditionEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SlotReadings {
        pub temp: f64,
    }

    /// Fail if the body carries a non-success embedded status, extracting the
    /// API's message when it has one
    fn check_embedded_status(body: &str) -> Result<(), SkycastError> {
        let probe: StatusProbe = serde_json::from_str(body).map_err(|e| {
            debug!("Response body is not a JSON object: {e}");
            SkycastError::fetch(FALLBACK_FETCH_MESSAGE)
        })?;

        if let Some(cod) = probe.cod {
            if !cod.is_success() {
                let message = probe
                    .message
                    .as_ref()
                    .and_then(|value| value.as_str())
                    .filter(|m| !m.is_empty())
                    .map_or_else(|| FALLBACK_FETCH_MESSAGE.to_string(), str::to_string);
                return Err(SkycastError::fetch(message));
            }
        }

        Ok(())
    }

    /// Decode a `/weather` body into normalized current conditions
    pub fn decode_current(body: &str) -> Result<CurrentConditions, SkycastError> {
        check_embedded_status(body)?;

        let response: CurrentResponse = serde_json::from_str(body).map_err(|e| {
            debug!("Malformed current weather body: {e}");
            SkycastError::fetch(FALLBACK_FETCH_MESSAGE)
        })?;

        let (condition, description) = response
            .weather
            .into_iter()
            .next()
            .map(|entry| (Condition::from_label(&entry.main), entry.description))
            .unwrap_or((Condition::Other(String::new()), String::new()));

        Ok(CurrentConditions {
            place: response.name,
            condition,
            description,
            temperature: response.main.temp,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
        })
    }

    /// Decode a `/forecast` body into a stride-sampled series
    pub fn decode_forecast(body: &str) -> Result<ForecastSeries, SkycastError> {
        check_embedded_status(body)?;

        let response: ForecastResponse = serde_json::from_str(body).map_err(|e| {
            debug!("Malformed forecast body: {e}");
            SkycastError::fetch(FALLBACK_FETCH_MESSAGE)
        })?;

        let entries = response
            .list
            .into_iter()
            .map(|slot| {
                let timestamp = NaiveDateTime::parse_from_str(&slot.dt_txt, "%Y-%m-%d %H:%M:%S")
                    .unwrap_or_else(|_| Utc::now().naive_utc());

                let (condition, description) = slot
                    .weather
                    .into_iter()
                    .next()
                    .map(|entry| (Condition::from_label(&entry.main), entry.description))
                    .unwrap_or((Condition::Other(String::new()), String::new()));

                ForecastEntry {
                    timestamp,
                    temperature: slot.main.temp,
                    condition,
                    description,
                }
            })
            .collect();

        Ok(ForecastSeries::sampled(entries, SAMPLE_STRIDE))
    }
}
