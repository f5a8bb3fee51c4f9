//! Natal chart assembly
//!
//! `compute_chart` runs the fixed pipeline: birth moment to Julian Day,
//! Julian Day plus location to sidereal time and ascendant, Julian Day to
//! per-body longitudes, then houses, aspects, and sign mapping. The whole
//! path is pure; identical inputs produce bit-identical results.

pub mod aspects;
pub mod houses;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::constants::{normalize_degrees, SIGN_SPAN_DEG, ZODIAC_NAMES, ZODIAC_SYMBOLS};
use crate::ephemeris::{absolute_house_of, Body};
use crate::time::{julian_day, local_sidereal_time, LocalMoment};

pub use aspects::{detect_aspects, Aspect, AspectKind};
pub use houses::{ascendant, obliquity, HouseCusps};

/// The birth data a chart is computed from.
///
/// The UTC offset is explicit: the engine subtracts `utc_offset_minutes`
/// from the local moment instead of consulting the host environment's
/// timezone, so results are reproducible anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Minutes east of Greenwich of the local clock
    pub utc_offset_minutes: i32,
    /// Geographic latitude in degrees, north positive
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive
    pub longitude: f64,
}

impl BirthInput {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        utc_offset_minutes: i32,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            date,
            time,
            utc_offset_minutes,
            latitude,
            longitude,
        }
    }

    /// Julian Day (UT) of the birth instant
    pub fn julian_day(&self) -> f64 {
        julian_day(LocalMoment::new(self.date, self.time).to_utc(self.utc_offset_minutes))
    }
}

/// The twelve zodiac signs, Aries first, in ecliptic-longitude order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in longitude order
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// The sign containing an ecliptic longitude
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize_degrees(longitude) / SIGN_SPAN_DEG).floor() as usize;
        Self::ALL[index.min(11)]
    }

    /// Get the sign's name as a string
    pub fn name(&self) -> &'static str {
        ZODIAC_NAMES[*self as usize]
    }

    /// Get the sign's glyph
    pub fn symbol(&self) -> &'static str {
        ZODIAC_SYMBOLS[*self as usize]
    }
}

/// One body's place in the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees, range [0, 360)
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Zodiac-anchored house index in [1, 12]; see
    /// [`crate::ephemeris::absolute_house_of`] for the convention
    pub house: u8,
}

impl PlanetPosition {
    /// Degrees into the body's sign, range [0, 30)
    pub fn degree_in_sign(&self) -> f64 {
        self.longitude % SIGN_SPAN_DEG
    }
}

/// A computed natal chart: the sole output artifact of the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    /// All ten bodies in [`Body::ALL`] order
    pub planets: Vec<PlanetPosition>,
    pub houses: HouseCusps,
    pub aspects: Vec<Aspect>,
    /// Ascendant ecliptic longitude in degrees, range [0, 360)
    pub ascendant: f64,
    pub ascendant_sign: ZodiacSign,
}

/// Compute a natal chart from birth data.
///
/// Pure and deterministic; no I/O, no shared state. Callers resolve place
/// names to coordinates beforehand (see [`crate::geocode`]).
pub fn compute_chart(input: &BirthInput) -> ChartResult {
    let jd = input.julian_day();

    let lst = local_sidereal_time(jd, input.longitude);
    let asc = ascendant(lst, input.latitude, jd);

    let planets: Vec<PlanetPosition> = Body::ALL
        .iter()
        .map(|&body| {
            let longitude = body.longitude(jd);
            PlanetPosition {
                body,
                longitude,
                sign: ZodiacSign::from_longitude(longitude),
                house: absolute_house_of(longitude),
            }
        })
        .collect();

    let houses = HouseCusps::from_ascendant(asc);
    let aspects = detect_aspects(&planets);

    ChartResult {
        planets,
        houses,
        aspects,
        ascendant: asc,
        ascendant_sign: ZodiacSign::from_longitude(asc),
    }
}
