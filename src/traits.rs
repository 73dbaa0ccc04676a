//! Provider capability seams for the comparison pipeline.
//!
//! The orchestrator only sees these traits; concrete providers live in
//! their own modules ([`crate::nbai`], [`crate::tomtom`], [`crate::mapbox`],
//! [`crate::google`]) and new providers can be added without touching the
//! orchestration logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Location;

/// One baseline trip as returned by the primary provider.
///
/// Distance is meters, duration is seconds; both stay in native units here
/// and are normalized only when a [`ProviderResult`] is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Route {
    pub distance: f64,
    pub duration: f64,
    pub start_location: Location,
    pub end_location: Location,
}

/// Normalized per-provider figures: meters with no decimals, minutes with
/// one decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResult {
    pub distance: String,
    pub duration: String,
}

impl ProviderResult {
    /// Single conversion point from a provider's native meters/seconds.
    pub fn from_meters_seconds(meters: f64, seconds: f64) -> Self {
        Self {
            distance: format!("{:.0}", meters),
            duration: format!("{:.1}", seconds / 60.0),
        }
    }
}

/// What one comparison adapter produced for one route.
///
/// Only Google returns addresses (reverse-geocoded start/end labels carried
/// inline in its directions payload); every other adapter leaves them unset.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOutcome {
    pub result: ProviderResult,
    pub addresses: Option<(String, String)>,
}

impl CompareOutcome {
    pub fn new(result: ProviderResult) -> Self {
        Self {
            result,
            addresses: None,
        }
    }
}

/// Failure of a single provider request. Never retried; the orchestrator
/// decides whether it skips a route (baseline) or a provider key (peer).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

/// Fetches the reference trip the peers are measured against.
pub trait BaselineProvider {
    /// Issues exactly one request for the given formatted coordinate pair
    /// and shared departure timestamp (unix seconds).
    fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        departure_time: i64,
    ) -> Result<Route, ProviderError>;
}

/// Re-queries one baseline trip against a peer provider.
pub trait CompareProvider: Send + Sync {
    /// Stable key the result is recorded under (`tomtom`, `mapbox`, ...).
    fn name(&self) -> &'static str;

    /// Issues exactly one request. On failure nothing is recorded for this
    /// provider; other providers' results are unaffected.
    fn compare(&self, route: &Route) -> Result<CompareOutcome, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_seconds_conversion() {
        let result = ProviderResult::from_meters_seconds(5000.0, 1800.0);
        assert_eq!(result.distance, "5000");
        assert_eq!(result.duration, "30.0");
    }

    #[test]
    fn test_duration_keeps_one_decimal() {
        let result = ProviderResult::from_meters_seconds(1234.6, 90.0);
        assert_eq!(result.distance, "1235");
        assert_eq!(result.duration, "1.5");
    }

    #[test]
    fn test_sub_minute_duration() {
        let result = ProviderResult::from_meters_seconds(400.0, 45.0);
        assert_eq!(result.duration, "0.8");
    }

    #[test]
    fn test_route_deserializes_from_provider_payload() {
        let route: Route = serde_json::from_str(
            r#"{
                "distance": 5000,
                "duration": 1800,
                "start_location": {"latitude": 34.0522, "longitude": -118.2437},
                "end_location": {"latitude": 34.0523, "longitude": -118.2438},
                "geometry": "ignored"
            }"#,
        )
        .expect("route payload");

        assert_eq!(route.distance, 5000.0);
        assert_eq!(route.start_location.latitude, 34.0522);
    }
}
