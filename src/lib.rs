//! route-compare core
//!
//! Benchmarks a primary routing provider against TomTom, Mapbox and Google
//! over randomly sampled trips inside a named area-of-interest polygon, and
//! renders the normalized results as JSON or CSV.

pub mod traits;
pub mod compare;
pub mod output;
pub mod config;
pub mod error;
pub mod geo;
pub mod polygon;
pub mod sample;
pub mod nbai;
pub mod tomtom;
pub mod mapbox;
pub mod google;
