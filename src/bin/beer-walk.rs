//! `beer-walk`: plan a walk from `--start` to `--end` with a beer every `--density`.
//!
//! Route planning is not implemented yet. The command echoes the walk parameters, asks whether
//! to start at a bar, and loads the licensed premises a route would be planned over.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use nyslad::ingestion::{read_dataset_with, IngestionOptions, TracingObserver, DEFAULT_SOURCE_FILE};
use nyslad::location::{parse_coordinates, parse_distance, DEFAULT_DENSITY, NY_MET_MUSEUM, NY_STOCK_EXCHANGE};
use nyslad::processing::in_county;
use nyslad::prompt::confirm;
use nyslad::{Coordinate, IngestionError, LiquorLicense};

/// Plan a beer walk between two points.
///
/// Coordinates are given as "x,y" (e.g. "40.7069, -74.0109"); the density is a distance with a
/// unit suffix (m, km, mi, ft, meters, kilometers, miles, feet).
#[derive(Debug, Parser)]
#[command(name = "beer-walk", version)]
struct Args {
    /// Where does your beer walk start?
    #[arg(long, default_value = NY_STOCK_EXCHANGE, value_parser = parse_coordinates)]
    start: Coordinate,

    /// Where does it end?
    #[arg(long, default_value = NY_MET_MUSEUM, value_parser = parse_coordinates)]
    end: Coordinate,

    /// How much distance between each beer?
    #[arg(long, default_value = DEFAULT_DENSITY, value_parser = parse_distance)]
    density: f64,

    /// Liquor-license registry extract (CSV)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOURCE_FILE)]
    source: PathBuf,

    /// Only consider premises in this county (e.g. "New York")
    #[arg(long)]
    county: Option<String>,

    /// Print the matching licenses as JSON lines
    #[arg(long)]
    json: bool,

    /// Don't ask, just start at a bar
    #[arg(short, long)]
    yes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("Hi! This is a work in progress hold on");
    println!("Start: {}, {}", args.start.x, args.start.y);
    println!("End: {}, {}", args.end.x, args.end.y);
    println!("Density: {} meters", args.density);

    let start_at_bar = args.yes
        || confirm(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            "Do you want to start by drinking a beer?",
            true,
        )?;
    debug!(start_at_bar, "walk preferences collected");

    let licenses = load_licenses(args)?;
    println!(
        "Loaded {} licensed premises from {}",
        licenses.len(),
        args.source.display()
    );

    if args.json {
        let mut out = io::stdout().lock();
        for lic in &licenses {
            writeln!(out, "{}", serde_json::to_string(lic)?)?;
        }
    }

    Ok(())
}

fn load_licenses(args: &Args) -> Result<Vec<LiquorLicense>, IngestionError> {
    let opts = IngestionOptions::from_path(&args.source).with_observer(Arc::new(TracingObserver));
    match &args.county {
        Some(county) => read_dataset_with(&opts, in_county(county.as_str())),
        None => read_dataset_with(&opts, |_| true),
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nyslad={level},beer_walk={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
