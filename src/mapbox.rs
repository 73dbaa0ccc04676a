//! Mapbox directions adapter.
//!
//! The only peer that takes lon-first coordinates (semicolon-separated in
//! the path). Distance and duration live directly on `routes[0]`.

use serde::Deserialize;

use crate::traits::{CompareOutcome, CompareProvider, ProviderError, ProviderResult, Route};

pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";

#[derive(Debug, Clone)]
pub struct MapboxConfig {
    pub base_url: String,
    pub access_token: String,
    pub timeout_secs: u64,
}

impl MapboxConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapboxClient {
    config: MapboxConfig,
    client: reqwest::blocking::Client,
}

impl MapboxClient {
    pub fn new(config: MapboxConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl CompareProvider for MapboxClient {
    fn name(&self) -> &'static str {
        "mapbox"
    }

    fn compare(&self, route: &Route) -> Result<CompareOutcome, ProviderError> {
        let url = format!(
            "{}/{},{};{},{}",
            self.config.base_url,
            route.start_location.longitude,
            route.start_location.latitude,
            route.end_location.longitude,
            route.end_location.latitude,
        );
        let response: DirectionsResponse = self
            .client
            .get(url)
            .query(&[
                ("access_token", self.config.access_token.as_str()),
                ("geometries", "geojson"),
                ("alternatives", "false"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let first = response
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed("directions response has no routes"))?;

        Ok(CompareOutcome::new(ProviderResult::from_meters_seconds(
            first.distance,
            first.duration,
        )))
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<MapboxRoute>,
}

#[derive(Debug, Deserialize)]
struct MapboxRoute {
    distance: f64,
    duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_extraction_and_conversion() {
        let response: DirectionsResponse = serde_json::from_str(
            r#"{
                "code": "Ok",
                "routes": [
                    {"distance": 5320.7, "duration": 1211.4, "geometry": {"type": "LineString", "coordinates": []}}
                ]
            }"#,
        )
        .expect("directions payload");

        let first = response.routes.into_iter().next().expect("route");
        let result = ProviderResult::from_meters_seconds(first.distance, first.duration);
        assert_eq!(result.distance, "5321");
        assert_eq!(result.duration, "20.2");
    }

    #[test]
    fn test_no_route_payload() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "routes": []}"#).expect("empty payload");
        assert!(response.routes.is_empty());
    }
}
