//! Geographic primitives and coordinate formatting.
//!
//! Points carry GeoJSON axis order (longitude first) internally; every
//! provider API expects `"latitude,longitude"` strings, so the boundary
//! between the two lives in [`format_coordinates`].

use serde::Deserialize;

/// A WGS84 coordinate in GeoJSON axis order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// A latitude-first coordinate pair as returned inside provider payloads.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Renders a point as `"<lat>,<lon>"` with both components fixed to
/// `precision` decimal places.
///
/// Deterministic for identical inputs; this is the only place coordinate
/// strings are produced, so precision policy is centralized here.
pub fn format_coordinates(point: &Point, precision: usize) -> String {
    format!(
        "{:.prec$},{:.prec$}",
        point.latitude,
        point.longitude,
        prec = precision
    )
}
