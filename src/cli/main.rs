//! Command-line front end for postal code lookups.
//!
//! Loads a GeoNames postal code export, runs one query against it and
//! prints the result as JSON on stdout. Logs go to stderr.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use postcodes::{CountryScan, LoadOptions, PostalIndex, PostalRecord, Unit};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "postcodes")]
#[command(about = "Look up GeoNames postal codes and the distances between them")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GeoNames postal code export (.txt or .txt.gz)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Only load records for this ISO country code
    #[arg(long)]
    country: Option<String>,

    /// Read the whole file when filtering by country
    #[arg(long)]
    full_scan: bool,

    /// Distance unit (km or mi)
    #[arg(short, long)]
    unit: Option<Unit>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every record for a postal code
    Lookup { code: String },
    /// Distance between two postal codes
    Distance { from: String, to: String },
    /// Distance from a postal code to a lat/lon point
    Point {
        code: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Postal codes closer than a maximum distance
    Radius { code: String, max: f64 },
    /// Dataset statistics
    Stats,
}

/// Settings after merging the config file with command-line flags
struct Settings {
    dataset: PathBuf,
    options: LoadOptions,
    unit: Unit,
}

impl Settings {
    fn resolve(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Invalid config {}", path.display()))?,
            None => Config::default(),
        };

        let dataset = args
            .dataset
            .clone()
            .or(config.dataset.path)
            .context("No dataset given, use --dataset or [dataset] path in the config file")?;

        let scan = if args.full_scan || config.dataset.full_scan {
            CountryScan::Full
        } else {
            CountryScan::StopAfterGroup
        };

        Ok(Self {
            dataset,
            options: LoadOptions {
                country: args.country.clone().or(config.dataset.country),
                scan,
            },
            unit: args.unit.unwrap_or(config.query.unit),
        })
    }
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    code: &'a str,
    ambiguous: bool,
    records: &'a [PostalRecord],
}

#[derive(Serialize)]
struct DistanceOutput<'a> {
    from: &'a str,
    to: &'a str,
    unit: Unit,
    distance: f64,
}

#[derive(Serialize)]
struct PointOutput<'a> {
    code: &'a str,
    lat: f64,
    lon: f64,
    unit: Unit,
    distance: f64,
}

#[derive(Serialize)]
struct RadiusOutput<'a> {
    origin: &'a str,
    unit: Unit,
    max_distance: f64,
    codes: Vec<&'a str>,
}

#[derive(Serialize)]
struct StatsOutput {
    codes: usize,
    records: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(args.verbose)));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = Settings::resolve(&args)?;

    let index = PostalIndex::load_with(&settings.dataset, &settings.options)
        .with_context(|| format!("Failed to load {}", settings.dataset.display()))?;

    run(&args.command, &index, settings.unit)
}

/// Log level used when RUST_LOG is not set
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn run(command: &Command, index: &PostalIndex, unit: Unit) -> Result<()> {
    let radius = unit.earth_radius();

    match command {
        Command::Lookup { code } => {
            let matches = index.lookup(code)?;
            if let Some(warning) = matches.warning() {
                warn!("{}", warning);
            }
            print_json(&LookupOutput {
                code: matches.code(),
                ambiguous: matches.is_ambiguous(),
                records: matches.records(),
            })
        }
        Command::Distance { from, to } => {
            let a = first_record(index, from)?;
            let b = first_record(index, to)?;
            print_json(&DistanceOutput {
                from,
                to,
                unit,
                distance: a.distance(b, radius),
            })
        }
        Command::Point { code, lat, lon } => {
            let record = first_record(index, code)?;
            print_json(&PointOutput {
                code,
                lat: *lat,
                lon: *lon,
                unit,
                distance: record.distance_to(*lat, *lon, radius),
            })
        }
        Command::Radius { code, max } => {
            let origin = first_record(index, code)?;
            let codes = index.within_radius(origin, *max, radius);
            info!("{} postal codes within {} {} of {}", codes.len(), max, unit, code);
            print_json(&RadiusOutput {
                origin: code,
                unit,
                max_distance: *max,
                codes,
            })
        }
        Command::Stats => print_json(&StatsOutput {
            codes: index.len(),
            records: index.record_count(),
        }),
    }
}

/// First record of a code, warning when the code is ambiguous
fn first_record<'a>(index: &'a PostalIndex, code: &str) -> Result<&'a PostalRecord> {
    let matches = index.lookup(code)?;
    if let Some(warning) = matches.warning() {
        warn!("{}, using the first", warning);
    }
    matches
        .first()
        .with_context(|| format!("Postal code {} has no records", code))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
