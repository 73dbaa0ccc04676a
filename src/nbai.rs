//! Primary-provider (NBAI) HTTP client.
//!
//! Source of the baseline routes every peer is compared against. The
//! `/directions/json` endpoint takes lat-first coordinate strings and a
//! unix-seconds departure time; only the first returned route is used.

use serde::Deserialize;

use crate::traits::{BaselineProvider, ProviderError, Route};

#[derive(Debug, Clone)]
pub struct NbaiConfig {
    /// API host including scheme, without trailing slash.
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl NbaiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NbaiClient {
    config: NbaiConfig,
    client: reqwest::blocking::Client,
}

impl NbaiClient {
    pub fn new(config: NbaiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl BaselineProvider for NbaiClient {
    fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        departure_time: i64,
    ) -> Result<Route, ProviderError> {
        let url = format!("{}/directions/json", self.config.base_url);
        let response: DirectionsResponse = self
            .client
            .get(url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("steps", "true"),
                ("alternatives", "false"),
                ("origin", origin),
                ("destination", destination),
                ("mode", "4w"),
                ("departure_time", &departure_time.to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        response
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed("directions response has no routes"))
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_route_is_extracted() {
        let response: DirectionsResponse = serde_json::from_str(
            r#"{
                "status": "Ok",
                "routes": [
                    {
                        "distance": 8211,
                        "duration": 1246,
                        "start_location": {"latitude": 34.05, "longitude": -118.24},
                        "end_location": {"latitude": 34.11, "longitude": -118.30}
                    },
                    {
                        "distance": 9000,
                        "duration": 1500,
                        "start_location": {"latitude": 0.0, "longitude": 0.0},
                        "end_location": {"latitude": 0.0, "longitude": 0.0}
                    }
                ]
            }"#,
        )
        .expect("directions payload");

        let route = response.routes.into_iter().next().expect("first route");
        assert_eq!(route.distance, 8211.0);
        assert_eq!(route.duration, 1246.0);
    }

    #[test]
    fn test_missing_routes_field_defaults_empty() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{"status": "ZeroResults"}"#).expect("empty payload");
        assert!(response.routes.is_empty());
    }
}
