//! Natalis: natal chart calculations in Rust
//!
//! This crate computes a natal astrological chart from a birth date, time,
//! and geographic location: ecliptic longitudes for the Sun, Moon, and eight
//! planets, the ascendant, twelve equal house cusps, and the angular aspects
//! between bodies.
//!
//! The engine ([`chart::compute_chart`]) is pure and deterministic — no
//! network, storage, or ambient state. Place-name resolution lives in the
//! separate [`geocode`] module and report rendering in [`report`]; neither
//! can alter a numeric result.
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use natalis::{compute_chart, BirthInput};
//!
//! let input = BirthInput::new(
//!     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//!     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
//!     0,    // UTC offset in minutes
//!     0.0,  // latitude
//!     0.0,  // longitude
//! );
//! let chart = compute_chart(&input);
//! assert_eq!(chart.planets.len(), 10);
//! ```

use thiserror::Error;

pub mod chart;
pub mod constants;
pub mod ephemeris;
pub mod geocode;
pub mod report;
pub mod time;

// Re-export commonly used types
pub use chart::{
    compute_chart, Aspect, AspectKind, BirthInput, ChartResult, HouseCusps, PlanetPosition,
    ZodiacSign,
};
pub use ephemeris::Body;
pub use geocode::{GeocodeError, Geocoder, Place};
pub use report::{describe_chart, ChartLabels};

/// Main error type for the natalis crate.
///
/// The chart engine itself is total and never fails; errors only arise at
/// the I/O boundary (geocoding, file handling in consumers).
#[derive(Debug, Error)]
pub enum NatalisError {
    #[error("Geocoding error: {0}")]
    Geocode(#[from] geocode::GeocodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for natalis operations
pub type Result<T> = std::result::Result<T, NatalisError>;
