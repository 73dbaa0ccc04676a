//! Result serialization: pretty JSON or flat CSV.
//!
//! CSV rows use a fixed column order with no header:
//! `nbai.distance, nbai.duration, google.distance, google.duration,
//! tomtom.distance, tomtom.duration, mapbox.distance, mapbox.duration,
//! origin, destination`. Fields for providers that failed on a route are
//! emitted as empty strings rather than aborting the whole render.

use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::compare::{ComparedRoute, BASELINE_KEY};

/// Provider column order for CSV rows.
const CSV_PROVIDERS: [&str; 4] = [BASELINE_KEY, "google", "tomtom", "mapbox"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Anything that is not `csv` renders as JSON.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Json,
        })
    }
}

#[derive(Serialize)]
struct ResultsEnvelope<'a> {
    results: &'a [ComparedRoute],
}

/// Renders the compared routes in the requested format.
pub fn render(routes: &[ComparedRoute], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ResultsEnvelope { results: routes }),
        OutputFormat::Csv => Ok(render_csv(routes)),
    }
}

fn render_csv(routes: &[ComparedRoute]) -> String {
    routes
        .iter()
        .map(csv_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_row(route: &ComparedRoute) -> String {
    let mut fields: Vec<&str> = Vec::with_capacity(CSV_PROVIDERS.len() * 2 + 2);

    for provider in CSV_PROVIDERS {
        match route.provider(provider) {
            Some(result) => {
                fields.push(&result.distance);
                fields.push(&result.duration);
            }
            None => {
                warn!(provider, origin = %route.origin, "provider missing from route, emitting blank fields");
                fields.push("");
                fields.push("");
            }
        }
    }
    fields.push(&route.origin);
    fields.push(&route.destination);

    fields.join(",")
}
