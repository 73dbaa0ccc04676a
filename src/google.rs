//! Google Directions adapter.
//!
//! Takes lat-first origin/destination query params and carries a hard
//! 5-second request timeout, matching the client-library default the rest
//! of the pipeline was tuned against. The first leg of the first route also
//! brings back reverse-geocoded start/end addresses, which this adapter
//! surfaces alongside the distance/duration figures.

use serde::Deserialize;

use crate::traits::{CompareOutcome, CompareProvider, ProviderError, ProviderResult, Route};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Intrinsic request timeout in milliseconds.
const REQUEST_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub base_url: String,
    pub api_key: String,
}

impl GoogleConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleClient {
    config: GoogleConfig,
    client: reqwest::blocking::Client,
}

impl GoogleClient {
    pub fn new(config: GoogleConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()?;

        Ok(Self { config, client })
    }
}

impl CompareProvider for GoogleClient {
    fn name(&self) -> &'static str {
        "google"
    }

    fn compare(&self, route: &Route) -> Result<CompareOutcome, ProviderError> {
        let origin = format!(
            "{},{}",
            route.start_location.latitude, route.start_location.longitude
        );
        let destination = format!(
            "{},{}",
            route.end_location.latitude, route.end_location.longitude
        );
        let response: DirectionsResponse = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let leg = response
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed("directions response has no routes"))?
            .legs
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed("first route has no legs"))?;

        let mut outcome = CompareOutcome::new(ProviderResult::from_meters_seconds(
            leg.distance.value,
            leg.duration.value,
        ));
        outcome.addresses = Some((leg.start_address, leg.end_address));
        Ok(outcome)
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<GoogleRoute>,
}

#[derive(Debug, Deserialize)]
struct GoogleRoute {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: ValueField,
    duration: ValueField,
    #[serde(default)]
    start_address: String,
    #[serde(default)]
    end_address: String,
}

#[derive(Debug, Deserialize)]
struct ValueField {
    value: f64,
}
