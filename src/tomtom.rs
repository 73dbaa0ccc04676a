//! TomTom routing adapter.
//!
//! `calculateRoute` takes colon-separated lat-first waypoints in the path;
//! distance and travel time come back under `routes[0].summary`.

use serde::Deserialize;

use crate::traits::{CompareOutcome, CompareProvider, ProviderError, ProviderResult, Route};

pub const DEFAULT_BASE_URL: &str = "https://api.tomtom.com/routing/1/calculateRoute";

#[derive(Debug, Clone)]
pub struct TomTomConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl TomTomConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TomTomClient {
    config: TomTomConfig,
    client: reqwest::blocking::Client,
}

impl TomTomClient {
    pub fn new(config: TomTomConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl CompareProvider for TomTomClient {
    fn name(&self) -> &'static str {
        "tomtom"
    }

    fn compare(&self, route: &Route) -> Result<CompareOutcome, ProviderError> {
        let url = format!(
            "{}/{},{}:{},{}/json",
            self.config.base_url,
            route.start_location.latitude,
            route.start_location.longitude,
            route.end_location.latitude,
            route.end_location.longitude,
        );
        let response: CalculateRouteResponse = self
            .client
            .get(url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("travelMode", "car"),
                ("computeTravelTimeFor", "all"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let summary = response
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed("calculateRoute response has no routes"))?
            .summary;

        Ok(CompareOutcome::new(ProviderResult::from_meters_seconds(
            summary.length_in_meters,
            summary.travel_time_in_seconds,
        )))
    }
}

#[derive(Debug, Deserialize)]
struct CalculateRouteResponse {
    #[serde(default)]
    routes: Vec<TomTomRoute>,
}

#[derive(Debug, Deserialize)]
struct TomTomRoute {
    summary: RouteSummary,
}

#[derive(Debug, Deserialize)]
struct RouteSummary {
    #[serde(rename = "lengthInMeters")]
    length_in_meters: f64,
    #[serde(rename = "travelTimeInSeconds")]
    travel_time_in_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_extraction_and_conversion() {
        let response: CalculateRouteResponse = serde_json::from_str(
            r#"{
                "routes": [
                    {"summary": {"lengthInMeters": 5000, "travelTimeInSeconds": 1800}}
                ]
            }"#,
        )
        .expect("calculateRoute payload");

        let summary = response.routes.into_iter().next().expect("route").summary;
        let result = ProviderResult::from_meters_seconds(
            summary.length_in_meters,
            summary.travel_time_in_seconds,
        );
        assert_eq!(result.distance, "5000");
        assert_eq!(result.duration, "30.0");
    }

    #[test]
    fn test_empty_routes_is_malformed() {
        let response: CalculateRouteResponse =
            serde_json::from_str(r#"{"routes": []}"#).expect("empty payload");
        assert!(response.routes.is_empty());
    }
}
