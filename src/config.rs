//! Environment-backed provider configuration.
//!
//! Endpoint URLs fall back to the public production hosts; API keys have no
//! sane default and are required. Everything is read once at startup and
//! never mutated during a run.

use std::env;

use crate::error::CompareError;
use crate::google::GoogleConfig;
use crate::mapbox::MapboxConfig;
use crate::nbai::NbaiConfig;
use crate::tomtom::TomTomConfig;
use crate::{google, mapbox, tomtom};

/// Connection settings for all four providers.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub nbai: NbaiConfig,
    pub tomtom: TomTomConfig,
    pub mapbox: MapboxConfig,
    pub google: GoogleConfig,
}

impl ProviderSettings {
    /// Reads `API_HOST`, `API_KEY`, `TOMTOM_URL`, `TOMTOM_KEY`,
    /// `MAPBOX_URL`, `MAPBOX_KEY`, `GOOGLE_DIRECTIONS_URL` and
    /// `GOOGLE_API_KEY` from the process environment.
    pub fn from_env() -> Result<Self, CompareError> {
        Ok(Self {
            nbai: NbaiConfig::new(required("API_HOST")?, required("API_KEY")?),
            tomtom: TomTomConfig::new(
                optional("TOMTOM_URL", tomtom::DEFAULT_BASE_URL),
                required("TOMTOM_KEY")?,
            ),
            mapbox: MapboxConfig::new(
                optional("MAPBOX_URL", mapbox::DEFAULT_BASE_URL),
                required("MAPBOX_KEY")?,
            ),
            google: GoogleConfig::new(
                optional("GOOGLE_DIRECTIONS_URL", google::DEFAULT_BASE_URL),
                required("GOOGLE_API_KEY")?,
            ),
        })
    }
}

/// Resolves the area of interest from the CLI flag with the environment as
/// fallback; must succeed before any network call is made.
pub fn resolve_area_of_interest(
    flag: Option<String>,
    env_value: Option<String>,
) -> Result<String, CompareError> {
    flag.or(env_value)
        .filter(|aoi| !aoi.is_empty())
        .ok_or(CompareError::MissingAreaOfInterest)
}

fn required(name: &str) -> Result<String, CompareError> {
    env::var(name).map_err(|_| CompareError::Config(format!("missing environment variable {}", name)))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
