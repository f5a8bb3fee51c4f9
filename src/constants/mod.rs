//! Constants module for chart calculations
//!
//! Process-wide immutable tables: epoch and angle conversion factors, the
//! zodiac and planet symbol tables, aspect settings, and the mean orbital
//! periods used by the simplified outer-planet model.

use std::f64::consts::PI;

// Time constants
/// J2000.0 epoch as Julian date (2000-01-01 12:00 UTC)
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees spanned by one zodiac sign or equal house
pub const SIGN_SPAN_DEG: f64 = 30.0;

// Aspects
/// Permitted deviation from an exact aspect angle, in degrees.
///
/// All five canonical aspects share one orb. With 8 degrees the detection
/// windows around 0/60/90/120/180 never overlap.
pub const ASPECT_ORB_DEG: f64 = 8.0;

// Mean orbital periods in days, used by the mean-motion position model.
// These come from the reference chart engine and are deliberately coarse;
// see `ephemeris::PositionModel::MeanMotion`.
/// Sidereal period of the Moon (only used if the Moon is downgraded to the
/// mean-motion model; the lunar series normally takes precedence)
pub const PERIOD_MOON: f64 = 27.3217;
/// Orbital period of Mercury
pub const PERIOD_MERCURY: f64 = 87.969;
/// Orbital period of Venus
pub const PERIOD_VENUS: f64 = 224.701;
/// Orbital period of Mars
pub const PERIOD_MARS: f64 = 686.98;
/// Orbital period of Jupiter
pub const PERIOD_JUPITER: f64 = 4_332.59;
/// Orbital period of Saturn
pub const PERIOD_SATURN: f64 = 10_759.22;
/// Orbital period of Uranus
pub const PERIOD_URANUS: f64 = 30_685.4;
/// Orbital period of Neptune
pub const PERIOD_NEPTUNE: f64 = 60_189.0;
/// Orbital period of Pluto
pub const PERIOD_PLUTO: f64 = 90_560.0;

/// Zodiac sign names, Aries first, in ecliptic-longitude order
pub const ZODIAC_NAMES: [&str; 12] = [
    "aries",
    "taurus",
    "gemini",
    "cancer",
    "leo",
    "virgo",
    "libra",
    "scorpio",
    "sagittarius",
    "capricorn",
    "aquarius",
    "pisces",
];

/// Zodiac glyphs, indexed like [`ZODIAC_NAMES`]
pub const ZODIAC_SYMBOLS: [&str; 12] = [
    "\u{2648}\u{fe0e}", // aries
    "\u{2649}\u{fe0e}", // taurus
    "\u{264a}\u{fe0e}", // gemini
    "\u{264b}\u{fe0e}", // cancer
    "\u{264c}\u{fe0e}", // leo
    "\u{264d}\u{fe0e}", // virgo
    "\u{264e}\u{fe0e}", // libra
    "\u{264f}\u{fe0e}", // scorpio
    "\u{2650}\u{fe0e}", // sagittarius
    "\u{2651}\u{fe0e}", // capricorn
    "\u{2652}\u{fe0e}", // aquarius
    "\u{2653}\u{fe0e}", // pisces
];

/// Planet glyphs, indexed in [`crate::ephemeris::Body::ALL`] order
pub const PLANET_SYMBOLS: [&str; 10] = [
    "\u{2609}", // sun
    "\u{263d}", // moon
    "\u{263f}", // mercury
    "\u{2640}", // venus
    "\u{2642}", // mars
    "\u{2643}", // jupiter
    "\u{2644}", // saturn
    "\u{2645}", // uranus
    "\u{2646}", // neptune
    "\u{2647}", // pluto
];

/// Normalize an angle in degrees into the range [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // A tiny negative remainder can round up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
