use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fieldarea::config::{FileConfig, OutputFormat};
use fieldarea::report::{AreaReport, LocationReport, Precision};
use fieldarea::{AreaMethod, parse_coordinate_input, parse_polygon};

/// Measure field parcels and check hand-typed coordinates
///
/// Examples:
///   # Area of a pasted [lon, lat] ring
///   fieldarea area '[[-63.9039,-8.7619],[-63.9001,-8.7612],[-63.8995,-8.7650]]'
///
///   # Read the ring from a file and compare against the ellipsoidal area
///   fieldarea area --file plot.json --method geodesic
///
///   # Validate a location typed with comma decimals
///   fieldarea locate -8,7619 -63,9039 --json
#[derive(Parser, Debug)]
#[command(name = "fieldarea")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches fieldarea.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true, conflicts_with = "format")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the area of a polygon given as a JSON array of [lon, lat] pairs
    Area {
        /// Coordinate list (read from --file or stdin when omitted)
        coordinates: Option<String>,

        /// Read the coordinate list from a file
        #[arg(short = 'f', long, conflicts_with = "coordinates")]
        file: Option<PathBuf>,

        /// Area method: planar (field-scale approximation) or geodesic
        #[arg(short = 'm', long)]
        method: Option<AreaMethod>,
    },
    /// Validate a latitude/longitude pair typed as free text
    Locate {
        /// Latitude in degrees, period or comma decimal
        #[arg(allow_hyphen_values = true)]
        lat: String,

        /// Longitude in degrees, period or comma decimal
        #[arg(allow_hyphen_values = true)]
        lon: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path)?
    } else {
        FileConfig::load().unwrap_or_default()
    };
    debug!(?file_config, "resolved configuration");

    let format = if args.json {
        OutputFormat::Json
    } else {
        args.format.unwrap_or(file_config.format)
    };

    match args.command {
        Command::Area {
            coordinates,
            file,
            method,
        } => {
            let raw = read_coordinates(coordinates, file)?;
            let polygon = parse_polygon(&raw).context("Invalid coordinate list")?;

            let method = method.unwrap_or(file_config.method);
            let precision = Precision {
                area_decimals: file_config.area_decimals,
                hectare_decimals: file_config.hectare_decimals,
            };
            let report = AreaReport::new(&polygon, method, precision);

            match format {
                OutputFormat::Text => println!("{}", report.to_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Locate { lat, lon } => {
            let coordinate = parse_coordinate_input(&lat, &lon).context("Invalid location")?;
            let report = LocationReport::new(coordinate);

            match format {
                OutputFormat::Text => println!("{}", report.to_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_coordinates(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read coordinate file: {:?}", path));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read coordinates from stdin")?;
    if text.trim().is_empty() {
        bail!("No coordinates given: pass them as an argument, with --file, or on stdin");
    }
    Ok(text)
}
