//! Sky Position Tool
//!
//! Prints where the bodies of a catalog stand in the sky for an observer and
//! where they land on a circular sky map of the given size.
//!
//! Usage:
//!   cargo run --bin sky_position -- --lat 51.48 --lon -0.0015 [--time 2024-03-20T21:00:00+01:00]

use chrono::DateTime;
use clap::{ArgAction, Parser};
use skydome::coordinates::equatorial_to_horizontal;
use skydome::positions::equatorial_position;
use skydome::sidereal::local_sidereal_time_from_epoch;
use skydome::{Observer, ScreenPoint, SkyCatalog, Timestamp, Viewport};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky Position Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes apparent positions of celestial bodies and projects them onto a sky map",
    long_about = None
)]
struct Args {
    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Instant as RFC 3339, e.g. 2024-03-20T21:00:00+01:00 (defaults to now)
    #[arg(short, long)]
    time: Option<String>,

    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Only report this body
    #[arg(short, long)]
    body: Option<String>,

    /// Sky map width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Sky map height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Sky map rotation in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rotation: f64,

    /// Skip bodies below the horizon
    #[arg(long, action = ArgAction::SetTrue)]
    visible_only: bool,
}

/// Format decimal hours in [0, 24) as HHhMMmSS.Ss
fn format_hours(hours: f64) -> String {
    // Work in tenths of a second so rounding carries into minutes and hours
    let tenths = ((hours * 36_000.0).round() as u64) % (24 * 36_000);
    let h = tenths / 36_000;
    let m = tenths % 36_000 / 600;
    let s = tenths % 600;
    format!("{:02}h{:02}m{:02}.{}s", h, m, s / 10, s % 10)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let timestamp = match &args.time {
        Some(text) => Timestamp::try_from(DateTime::parse_from_rfc3339(text)?)?,
        None => Timestamp::now(),
    };
    let observer = Observer::new(args.lat, args.lon)?;
    let viewport = Viewport::new(args.width, args.height, args.rotation)?;
    let catalog = match &args.catalog {
        Some(path) => SkyCatalog::from_json_file(path)?,
        None => SkyCatalog::standard(),
    };

    if let Some(id) = &args.body {
        if catalog.get(id).is_none() {
            return Err(format!("body '{}' not found in catalog", id).into());
        }
    }

    let epoch_days = timestamp.epoch_days();
    let lst = local_sidereal_time_from_epoch(epoch_days, observer.longitude());
    println!("Time:     {} (JD {:.5})", timestamp, timestamp.julian_date());
    println!(
        "Observer: lat {:.4}°, lon {:.4}°",
        observer.latitude(),
        observer.longitude()
    );
    println!(
        "{:<18} {:>14} {:>9} {:>9} {:>9} {:>9} {:>9}  {}",
        "Body", "RA", "Dec", "Az", "Alt", "x", "y", "Visible"
    );
    println!("{}", "-".repeat(96));

    for entry in catalog.iter() {
        if args.body.as_deref().is_some_and(|wanted| wanted != entry.id) {
            continue;
        }
        let eq = equatorial_position(&entry.body, epoch_days);
        let hz = equatorial_to_horizontal(&eq, lst, observer.latitude());
        let point = ScreenPoint::from_horizontal(&hz, &viewport);
        if args.visible_only && !point.visible {
            continue;
        }
        println!(
            "{:<18} {:>14} {:>9.3} {:>9.3} {:>9.3} {:>9.1} {:>9.1}  {}",
            entry.id,
            format_hours(eq.ra_hours),
            eq.dec_degrees,
            point.azimuth,
            point.altitude,
            point.x,
            point.y,
            if point.visible { "yes" } else { "no" }
        );
    }

    Ok(())
}
