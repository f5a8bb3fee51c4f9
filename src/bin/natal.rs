//! Natal Chart Tool
//!
//! Computes a natal chart for a birth moment and location and prints a
//! plain-text summary. The location can be given as coordinates or as a
//! free-text place name resolved through Nominatim.
//!
//! Usage:
//!   cargo run --bin natal -- --date 1990-06-15 --time 08:30 --lat 52.52 --lon 13.405
//!   cargo run --bin natal -- --date 1990-06-15 --time 08:30 --place "Berlin" --utc-offset 120

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;

use natalis::{compute_chart, describe_chart, BirthInput, ChartLabels, Geocoder};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Natal Chart Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes a natal chart: planet longitudes, houses, and aspects",
    long_about = None
)]
struct Args {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    /// Birth time on the local clock (HH:MM)
    #[arg(long)]
    time: NaiveTime,

    /// UTC offset of the birth place in minutes, east positive
    #[arg(long, default_value_t = 0)]
    utc_offset: i32,

    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Place name to geocode instead of --lat/--lon
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
}

fn resolve_location(args: &Args) -> Result<(f64, f64, String)> {
    if let Some(name) = &args.place {
        let geocoder = Geocoder::new()?;
        let places = geocoder.search(name)?;
        let best = &places[0];
        if places.len() > 1 {
            eprintln!("{} candidates for '{}', using: {}", places.len(), name, best.display_name);
        }
        return Ok((best.latitude, best.longitude, best.display_name.clone()));
    }

    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Ok((lat, lon, format!("{:.4}, {:.4}", lat, lon))),
        _ => Err("either --place or both --lat and --lon are required".into()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (latitude, longitude, location) = resolve_location(&args)?;

    let input = BirthInput::new(args.date, args.time, args.utc_offset, latitude, longitude);
    let chart = compute_chart(&input);

    println!(
        "{} {} ({}, utc{:+}min)",
        args.date, args.time, location, args.utc_offset
    );
    print!("{}", describe_chart(&chart, &ChartLabels::default()));

    Ok(())
}
