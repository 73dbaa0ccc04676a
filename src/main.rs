//! route-compare CLI.
//!
//! Samples random trips inside an area of interest, compares the primary
//! provider's routes against TomTom, Mapbox and Google, and prints the
//! aggregate results to stdout. Logs go to stderr so the payload stays
//! machine-readable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use route_compare::compare::{run_comparison, RunOptions};
use route_compare::config::{resolve_area_of_interest, ProviderSettings};
use route_compare::error::CompareError;
use route_compare::google::GoogleClient;
use route_compare::mapbox::MapboxClient;
use route_compare::nbai::NbaiClient;
use route_compare::output::{render, OutputFormat};
use route_compare::polygon::AreaPolygon;
use route_compare::sample::PointSampler;
use route_compare::tomtom::TomTomClient;
use route_compare::traits::CompareProvider;

#[derive(Debug, Parser)]
#[command(name = "route-compare")]
#[command(about = "Compare routes from the primary provider against TomTom, Mapbox and Google")]
struct Cli {
    /// Area of interest, e.g. atlanta, bangalore, dallas, la, london,
    /// newyork, ohio, ontario, southyorkshire.
    #[arg(long)]
    aoi: Option<String>,

    /// Output format.
    #[arg(long, default_value = "json")]
    format: String,

    /// Number of origin/destination pairs to sample.
    #[arg(long, default_value_t = 2)]
    routes: usize,

    /// Decimal precision for formatted coordinates.
    #[arg(long, default_value_t = 10)]
    precision: usize,

    /// Directory holding `<aoi>_poly.json` boundary files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CompareError> {
    let aoi = resolve_area_of_interest(cli.aoi, std::env::var("AREA_OF_INTEREST").ok())?;
    let format: OutputFormat = cli.format.parse().unwrap_or_default();

    let settings = ProviderSettings::from_env()?;
    let nbai = NbaiClient::new(settings.nbai).map_err(client_error)?;
    let tomtom = TomTomClient::new(settings.tomtom).map_err(client_error)?;
    let mapbox = MapboxClient::new(settings.mapbox).map_err(client_error)?;
    let google = GoogleClient::new(settings.google).map_err(client_error)?;
    let peers: [&dyn CompareProvider; 3] = [&tomtom, &mapbox, &google];

    let polygon = AreaPolygon::load(&cli.data_dir, &aoi)?;
    let mut sampler = PointSampler::new();
    let options = RunOptions {
        route_count: cli.routes,
        precision: cli.precision,
    };

    info!(%aoi, routes = options.route_count, "starting comparison run");
    let compared = run_comparison(&nbai, &peers, &mut sampler, &polygon, &options)?;
    info!(completed = compared.len(), "comparison run finished");

    render(&compared, format)
        .map_err(|error| CompareError::Config(format!("failed to serialize results: {}", error)))
}

fn client_error(error: reqwest::Error) -> CompareError {
    CompareError::Config(format!("failed to build http client: {}", error))
}
