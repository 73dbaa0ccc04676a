//! Route comparison orchestrator.
//!
//! Drives one full run: sample origin/destination points, fetch a baseline
//! route per pair, then re-query each surviving route against the peer
//! providers. Peer results accumulate into a per-provider map that is
//! merged into the output record once per route, so no adapter ever sees
//! (or can clobber) another adapter's entry.
//!
//! Failure policy: a baseline failure drops that route index entirely; a
//! peer failure drops only that provider's key. Both are logged and never
//! retried.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CompareError;
use crate::geo::format_coordinates;
use crate::polygon::AreaPolygon;
use crate::sample::PointSampler;
use crate::traits::{BaselineProvider, CompareOutcome, CompareProvider, ProviderError, ProviderResult};

/// Key the primary provider's own figures are recorded under.
pub const BASELINE_KEY: &str = "nbai";

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Number of origin/destination pairs to sample.
    pub route_count: usize,
    /// Decimal precision for formatted coordinate strings.
    pub precision: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            route_count: 2,
            precision: 10,
        }
    }
}

/// One fully-compared trip, ready for formatting.
///
/// `providers` holds whatever subset of provider keys succeeded; the
/// baseline key is always present (a route without a baseline never makes
/// it into the result set).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedRoute {
    pub origin: String,
    pub destination: String,
    #[serde(flatten)]
    pub providers: BTreeMap<&'static str, ProviderResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
}

impl ComparedRoute {
    pub fn provider(&self, name: &str) -> Option<&ProviderResult> {
        self.providers.get(name)
    }
}

/// Runs the full comparison pipeline.
///
/// Origins and destinations are sampled with two independent calls, so
/// they may come from different rings of a multi-ring area; each pair is
/// an independent trial, not a tour. One departure timestamp is captured
/// up front and shared by every baseline request.
///
/// Peers run in slice order for every route. The returned vector may be
/// shorter than `options.route_count` when baseline fetches fail.
pub fn run_comparison(
    baseline: &dyn BaselineProvider,
    peers: &[&dyn CompareProvider],
    sampler: &mut PointSampler,
    polygon: &AreaPolygon,
    options: &RunOptions,
) -> Result<Vec<ComparedRoute>, CompareError> {
    let origins = sampler.sample(polygon, options.route_count)?;
    let destinations = sampler.sample(polygon, options.route_count)?;
    let departure_time = unix_now();

    let mut compared = Vec::with_capacity(options.route_count);

    for (index, (origin_point, destination_point)) in
        origins.iter().zip(destinations.iter()).enumerate()
    {
        let origin = format_coordinates(origin_point, options.precision);
        let destination = format_coordinates(destination_point, options.precision);

        let route = match baseline.fetch_route(&origin, &destination, departure_time) {
            Ok(route) => route,
            Err(error) => {
                warn!(index, %error, "baseline fetch failed, skipping route");
                continue;
            }
        };
        debug!(index, distance = route.distance, duration = route.duration, "baseline fetched");

        let mut record = ComparedRoute {
            origin,
            destination,
            providers: BTreeMap::new(),
            start_address: None,
            end_address: None,
        };
        record.providers.insert(
            BASELINE_KEY,
            ProviderResult::from_meters_seconds(route.distance, route.duration),
        );

        for (provider, outcome) in run_peers(peers, &route) {
            match outcome {
                Ok(CompareOutcome { result, addresses }) => {
                    record.providers.insert(provider, result);
                    if let Some((start, end)) = addresses {
                        record.start_address = Some(start);
                        record.end_address = Some(end);
                    }
                }
                Err(error) => {
                    warn!(index, provider, %error, "comparison failed, key left unset");
                }
            }
        }

        compared.push(record);
    }

    Ok(compared)
}

/// Runs every peer against one route, preserving slice order in the output.
#[cfg(not(feature = "parallel"))]
fn run_peers(
    peers: &[&dyn CompareProvider],
    route: &crate::traits::Route,
) -> Vec<(&'static str, Result<CompareOutcome, ProviderError>)> {
    peers
        .iter()
        .map(|peer| (peer.name(), peer.compare(route)))
        .collect()
}

/// Parallel fan-out over the rayon pool; collection order still matches the
/// slice, so merge results are identical to the sequential path.
#[cfg(feature = "parallel")]
fn run_peers(
    peers: &[&dyn CompareProvider],
    route: &crate::traits::Route,
) -> Vec<(&'static str, Result<CompareOutcome, ProviderError>)> {
    use rayon::prelude::*;

    peers
        .par_iter()
        .map(|peer| (peer.name(), peer.compare(route)))
        .collect()
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}
