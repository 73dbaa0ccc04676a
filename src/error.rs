//! Top-level error type for the comparison pipeline.
//!
//! Provider-level failures ([`crate::traits::ProviderError`]) are recovered
//! locally by the orchestrator and never reach this enum; everything here is
//! fatal for the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Area of interest not specified. Use --aoi or set AREA_OF_INTEREST")]
    MissingAreaOfInterest,

    #[error("Failed to load polygon data for area: {area}. Error: {source}")]
    PolygonLoad {
        area: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("polygon has no rings to sample from")]
    InvalidPolygon,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for pipeline entry points.
pub type CompareResult<T> = Result<T, CompareError>;
