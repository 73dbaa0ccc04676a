//! Random point generation inside an area-of-interest polygon.
//!
//! Each `sample` call picks one ring uniformly at random and draws points
//! uniformly within that ring via bounding-box rejection sampling. Two
//! consecutive calls may land on different rings; origin and destination
//! batches are sampled independently on purpose.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::CompareError;
use crate::geo::Point;
use crate::polygon::AreaPolygon;

/// Uniform point sampler over polygon rings.
#[derive(Debug)]
pub struct PointSampler {
    rng: SmallRng,
}

impl PointSampler {
    /// Entropy-seeded sampler for production runs.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic sampler for tests and reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draws `count` points uniformly distributed inside one randomly
    /// chosen ring of `polygon`.
    ///
    /// Fails with [`CompareError::InvalidPolygon`] when the polygon has no
    /// rings.
    pub fn sample(
        &mut self,
        polygon: &AreaPolygon,
        count: usize,
    ) -> Result<Vec<Point>, CompareError> {
        let rings = polygon.rings();
        if rings.is_empty() {
            return Err(CompareError::InvalidPolygon);
        }

        let ring = &rings[self.rng.gen_range(0..rings.len())];
        if ring.vertices().len() < 3 {
            return Err(CompareError::InvalidPolygon);
        }
        let (min_lon, min_lat, max_lon, max_lat) = ring.bounding_box();

        let mut points = Vec::with_capacity(count);
        while points.len() < count {
            let candidate = Point::new(
                self.rng.gen_range(min_lon..=max_lon),
                self.rng.gen_range(min_lat..=max_lat),
            );
            if ring.contains(&candidate) {
                points.push(candidate);
            }
        }

        Ok(points)
    }
}

impl Default for PointSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Ring;

    fn unit_square() -> AreaPolygon {
        AreaPolygon::new(vec![Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ])])
    }

    #[test]
    fn test_samples_requested_count() {
        let mut sampler = PointSampler::from_seed(7);
        let points = sampler.sample(&unit_square(), 25).expect("sample");
        assert_eq!(points.len(), 25);
    }

    #[test]
    fn test_samples_fall_inside_ring() {
        let mut sampler = PointSampler::from_seed(42);
        let polygon = unit_square();
        let points = sampler.sample(&polygon, 100).expect("sample");

        for point in points {
            assert!(polygon.rings()[0].contains(&point), "{:?} escaped the ring", point);
        }
    }

    #[test]
    fn test_empty_polygon_is_rejected() {
        let mut sampler = PointSampler::from_seed(1);
        let polygon = AreaPolygon::new(Vec::new());
        assert!(matches!(
            sampler.sample(&polygon, 1),
            Err(CompareError::InvalidPolygon)
        ));
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let polygon = unit_square();
        let first = PointSampler::from_seed(99).sample(&polygon, 10).expect("sample");
        let second = PointSampler::from_seed(99).sample(&polygon, 10).expect("sample");
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_count_yields_empty() {
        let mut sampler = PointSampler::from_seed(3);
        let points = sampler.sample(&unit_square(), 0).expect("sample");
        assert!(points.is_empty());
    }
}
