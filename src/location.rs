//! Location resolution
//!
//! Turns user actions (typed text, device position) into [`LocationQuery`]
//! values for the weather fetcher. Device positions come from a host
//! capability behind [`GeolocationProvider`]; environments without the
//! capability pass `None` and get an immediate error, with no fix attempted.

use crate::error::SkycastError;
use crate::models::LocationQuery;
use tracing::debug;

/// A one-shot position fix from the host environment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Host capability for one-shot device position fixes.
///
/// A single attempt per call; retries and timeouts are the provider's
/// business, not the resolver's.
pub trait GeolocationProvider {
    /// Request the current device position, or an explanation of refusal
    fn current_position(&self) -> Result<DevicePosition, String>;
}

/// Service for resolving user input into location queries
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve typed search text. Whitespace is trimmed; nothing left means
    /// there is nothing to look up.
    pub fn resolve_text(input: &str) -> Result<LocationQuery, SkycastError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SkycastError::input("Please enter a location"));
        }

        debug!(query = trimmed, "Resolved text input");
        Ok(LocationQuery::name(trimmed))
    }

    /// Resolve the device position into a coordinate query
    pub fn resolve_device(
        provider: Option<&dyn GeolocationProvider>,
    ) -> Result<LocationQuery, SkycastError> {
        let Some(provider) = provider else {
            return Err(SkycastError::geolocation(
                "Geolocation is not supported on this system",
            ));
        };

        match provider.current_position() {
            Ok(position) => {
                debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "Resolved device position"
                );
                Ok(LocationQuery::coordinates(
                    position.latitude,
                    position.longitude,
                ))
            }
            Err(reason) => {
                debug!("Position fix refused: {reason}");
                Err(SkycastError::geolocation(
                    "Unable to retrieve your location",
                ))
            }
        }
    }
}
