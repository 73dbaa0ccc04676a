//! Area-of-interest polygons loaded from GeoJSON-style files.
//!
//! The on-disk shape is a `FeatureCollection` whose features carry polygon
//! geometries (`coordinates` = list of rings, outer ring first). Only the
//! outer ring of each feature is kept; holes are not part of the sampling
//! model.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::CompareError;
use crate::geo::Point;

/// One closed ring of lon/lat vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<Point>,
}

impl Ring {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Axis-aligned bounding box as (min_lon, min_lat, max_lon, max_lat).
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut min_lon = f64::INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut max_lat = f64::NEG_INFINITY;

        for vertex in &self.vertices {
            min_lon = min_lon.min(vertex.longitude);
            min_lat = min_lat.min(vertex.latitude);
            max_lon = max_lon.max(vertex.longitude);
            max_lat = max_lat.max(vertex.latitude);
        }

        (min_lon, min_lat, max_lon, max_lat)
    }

    /// Even-odd (ray casting) containment test.
    pub fn contains(&self, point: &Point) -> bool {
        let vertices = &self.vertices;
        if vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = vertices.len() - 1;

        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[j];
            let crosses = (a.latitude > point.latitude) != (b.latitude > point.latitude);
            if crosses {
                let slope_lon = (b.longitude - a.longitude) * (point.latitude - a.latitude)
                    / (b.latitude - a.latitude)
                    + a.longitude;
                if point.longitude < slope_lon {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }
}

/// The boundary of one named area of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPolygon {
    rings: Vec<Ring>,
}

impl AreaPolygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Loads `<data_dir>/<area>_poly.json` and extracts the outer ring of
    /// every feature.
    pub fn load(data_dir: &Path, area: &str) -> Result<Self, CompareError> {
        let path = data_dir.join(format!("{}_poly.json", area));
        Self::load_path(&path).map_err(|source| CompareError::PolygonLoad {
            area: area.to_string(),
            source,
        })
    }

    fn load_path(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let reader = BufReader::new(File::open(path)?);
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        Ok(Self::from_features(collection))
    }

    /// Parses an already-loaded GeoJSON string.
    pub fn parse(geojson: &str) -> Result<Self, serde_json::Error> {
        let collection: FeatureCollection = serde_json::from_str(geojson)?;
        Ok(Self::from_features(collection))
    }

    fn from_features(collection: FeatureCollection) -> Self {
        let rings = collection
            .features
            .into_iter()
            .filter_map(|feature| feature.geometry.coordinates.into_iter().next())
            .map(|outer| {
                Ring::new(
                    outer
                        .into_iter()
                        .map(|position| Point::new(position[0], position[1]))
                        .collect(),
                )
            })
            .collect();

        Self { rings }
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<Vec<[f64; 2]>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_SQUARE: &str = r#"{
        "features": [
            {
                "geometry": {
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let polygon = AreaPolygon::parse(UNIT_SQUARE).expect("parse unit square");
        assert_eq!(polygon.rings().len(), 1);
        assert_eq!(polygon.rings()[0].vertices().len(), 5);
    }

    #[test]
    fn test_contains_inside_and_outside() {
        let polygon = AreaPolygon::parse(UNIT_SQUARE).expect("parse unit square");
        let ring = &polygon.rings()[0];

        assert!(ring.contains(&Point::new(0.5, 0.5)));
        assert!(ring.contains(&Point::new(0.01, 0.99)));
        assert!(!ring.contains(&Point::new(1.5, 0.5)));
        assert!(!ring.contains(&Point::new(-0.1, -0.1)));
    }

    #[test]
    fn test_bounding_box() {
        let polygon = AreaPolygon::parse(UNIT_SQUARE).expect("parse unit square");
        let bbox = polygon.rings()[0].bounding_box();
        assert_eq!(bbox, (0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_load_missing_file_mentions_area() {
        let missing = AreaPolygon::load(Path::new("/nonexistent"), "atlantis");
        let message = missing.expect_err("missing file must fail").to_string();
        assert!(message.contains("Failed to load polygon data for area: atlantis"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("la_poly.json"), UNIT_SQUARE).expect("write fixture");

        let polygon = AreaPolygon::load(dir.path(), "la").expect("load fixture");
        assert_eq!(polygon.rings().len(), 1);
    }

    #[test]
    fn test_concave_ring_containment() {
        // L-shaped ring: the notch at the top-right is outside.
        let ring = Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 0.0),
        ]);

        assert!(ring.contains(&Point::new(0.5, 1.5)));
        assert!(ring.contains(&Point::new(1.5, 0.5)));
        assert!(!ring.contains(&Point::new(1.5, 1.5)));
    }
}
