//! Ascendant and equal-house division
//!
//! The ascendant follows the classical horizon formula in the chart's
//! retrograde-relative angular direction; the twelve cusps are an equal
//! 30-degree division starting at the ascendant.

use serde::Serialize;

use crate::constants::{normalize_degrees, DEG2RAD, RAD2DEG, SIGN_SPAN_DEG};
use crate::time::julian_centuries;

/// Floor applied to |sin(LST)| in the ascendant formula. Near 0 and 180
/// degrees of sidereal time the divisor vanishes; clamping keeps the
/// function total instead of leaking NaN or infinity.
const MIN_SIN_LST: f64 = 1e-9;

/// Mean obliquity of the ecliptic in degrees
pub fn obliquity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.4392911 - 0.0130042 * t - 0.00000016 * t * t + 0.000000504 * t * t * t
}

/// Ascendant ecliptic longitude in degrees, range [0, 360)
///
/// Takes the local sidereal time and geographic latitude in degrees plus the
/// Julian Day (for the obliquity term). The quadrant is fixed up after the
/// plain `atan`, and the result is mirrored into the chart's angular
/// direction as `(360 - lambda) mod 360`.
pub fn ascendant(local_sidereal_time: f64, latitude: f64, jd: f64) -> f64 {
    let lst = local_sidereal_time * DEG2RAD;
    let lat = latitude * DEG2RAD;
    let epsilon = obliquity(jd) * DEG2RAD;

    let mut sin_lst = lst.sin();
    if sin_lst.abs() < MIN_SIN_LST {
        sin_lst = if sin_lst < 0.0 { -MIN_SIN_LST } else { MIN_SIN_LST };
    }

    let tan_asc = (lst.cos() * epsilon.sin() + lat.tan() * epsilon.cos()) / sin_lst;
    let mut asc = tan_asc.atan() * RAD2DEG;

    if lst.sin() < 0.0 {
        asc += 180.0;
    }

    normalize_degrees(360.0 - asc)
}

/// The twelve house cusp longitudes of an equal-house chart.
///
/// Cusp 0 is always the ascendant; each following cusp sits 30 degrees
/// further along the ecliptic, modulo 360.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    /// Divide the ecliptic into twelve equal houses from the ascendant
    pub fn from_ascendant(ascendant: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_degrees(ascendant + i as f64 * SIGN_SPAN_DEG);
        }
        Self { cusps }
    }

    /// Longitude of the cusp opening house `index + 1`
    pub fn cusp(&self, index: usize) -> f64 {
        self.cusps[index]
    }

    /// All twelve cusps in house order
    pub fn as_array(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// Ascendant-anchored house index in [1, 12] for an ecliptic longitude.
    ///
    /// This is the counterpart of [`crate::ephemeris::absolute_house_of`]:
    /// houses are counted from the ascendant's own 30-degree bucket rather
    /// than from 0 Aries.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let offset = normalize_degrees(longitude - self.cusps[0]);
        (offset / SIGN_SPAN_DEG).floor() as u8 + 1
    }
}
