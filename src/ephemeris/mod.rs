//! Planetary position models
//!
//! Every chart body maps to one of four position models, dispatched as a
//! tagged variant so a single body can later be upgraded (say, to a full
//! VSOP87 series) without touching house or aspect logic:
//!
//! - `SolarTheory`: low-precision solar theory (mean longitude, mean anomaly,
//!   three-term equation of center).
//! - `LunarTheory`: low-precision lunar series, see [`lunar`].
//! - `Kepler`: two-body Keplerian solution with a fixed-iteration
//!   Newton-Raphson eccentric-anomaly solver (Mercury).
//! - `MeanMotion`: a crude placeholder that wraps the Julian Day around the
//!   body's mean orbital period. It models neither eccentricity nor epoch
//!   alignment and can diverge from a real ephemeris by many degrees; it is
//!   kept because the reference engine behaves this way for the outer bodies.

pub mod lunar;

use serde::Serialize;

use crate::constants::{
    normalize_degrees, DEG2RAD, PERIOD_JUPITER, PERIOD_MARS, PERIOD_NEPTUNE, PERIOD_PLUTO,
    PERIOD_SATURN, PERIOD_URANUS, PERIOD_VENUS, PLANET_SYMBOLS, RAD2DEG,
};
use crate::time::julian_centuries;

/// Enum representing the ten chart bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// All chart bodies in canonical chart order
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
        }
    }

    /// Get the body's astrological glyph
    pub fn symbol(&self) -> &'static str {
        PLANET_SYMBOLS[*self as usize]
    }

    /// Select the position model used for this body
    pub fn position_model(&self) -> PositionModel {
        match self {
            Body::Sun => PositionModel::SolarTheory,
            Body::Moon => PositionModel::LunarTheory,
            Body::Mercury => PositionModel::Kepler(MERCURY_ELEMENTS),
            Body::Venus => PositionModel::MeanMotion { period_days: PERIOD_VENUS },
            Body::Mars => PositionModel::MeanMotion { period_days: PERIOD_MARS },
            Body::Jupiter => PositionModel::MeanMotion { period_days: PERIOD_JUPITER },
            Body::Saturn => PositionModel::MeanMotion { period_days: PERIOD_SATURN },
            Body::Uranus => PositionModel::MeanMotion { period_days: PERIOD_URANUS },
            Body::Neptune => PositionModel::MeanMotion { period_days: PERIOD_NEPTUNE },
            Body::Pluto => PositionModel::MeanMotion { period_days: PERIOD_PLUTO },
        }
    }

    /// Ecliptic longitude of this body in degrees, range [0, 360)
    pub fn longitude(&self, jd: f64) -> f64 {
        self.position_model().longitude(jd)
    }
}

/// Keplerian orbital elements as quadratic polynomials in Julian centuries
/// since J2000.0 (constant, linear, quadratic coefficients)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerElements {
    /// Mean anomaly in degrees
    pub mean_anomaly: [f64; 3],
    /// Orbital eccentricity (dimensionless)
    pub eccentricity: [f64; 3],
    /// Argument of perihelion in degrees
    pub perihelion_argument: [f64; 3],
}

/// Mercury's orbital elements
pub const MERCURY_ELEMENTS: KeplerElements = KeplerElements {
    mean_anomaly: [174.7910857, 149_472.51529, 0.00000114],
    eccentricity: [0.20563175, 0.000020406, -0.0000000284],
    perihelion_argument: [29.12478, 1.01444, 0.000163],
};

/// Iterations of the eccentric-anomaly solver. Fixed rather than tolerance
/// driven so identical inputs always take the identical float path.
const KEPLER_ITERATIONS: usize = 5;

/// A longitude model for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionModel {
    /// Low-precision solar theory
    SolarTheory,
    /// Low-precision lunar series
    LunarTheory,
    /// Two-body Keplerian orbit
    Kepler(KeplerElements),
    /// Mean-motion placeholder: longitude wraps linearly with the period
    MeanMotion { period_days: f64 },
}

impl PositionModel {
    /// Ecliptic longitude in degrees for the given Julian Day, range [0, 360)
    pub fn longitude(&self, jd: f64) -> f64 {
        match self {
            PositionModel::SolarTheory => solar_longitude(jd),
            PositionModel::LunarTheory => lunar::lunar_longitude(jd),
            PositionModel::Kepler(elements) => kepler_longitude(elements, jd, KEPLER_ITERATIONS),
            PositionModel::MeanMotion { period_days } => {
                normalize_degrees(((jd / period_days) % 1.0) * 360.0)
            }
        }
    }
}

/// Evaluate a polynomial with ascending coefficients at `t`
fn polynomial(coefficients: &[f64], t: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * t + c)
}

/// Mean anomaly of the Sun in degrees (not normalized)
pub fn solar_mean_anomaly(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    polynomial(&[357.52911, 35_999.05029, -0.0001537], t)
}

/// Ecliptic longitude of the Sun in degrees, range [0, 360)
///
/// Mean longitude plus the three-term equation of center; good to a couple
/// hundredths of a degree over the modern era.
pub fn solar_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    let l0 = polynomial(&[280.46646, 36_000.76983, 0.0003032], t);
    let m = solar_mean_anomaly(jd) * DEG2RAD;

    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    normalize_degrees(l0 + center)
}

/// Ecliptic longitude from Keplerian elements, range [0, 360)
///
/// The eccentric anomaly is carried in degrees with the trig evaluated in
/// radians, matching the reference engine; the iteration is a contraction
/// either way and settles well within the fixed iteration count.
pub fn kepler_longitude(elements: &KeplerElements, jd: f64, iterations: usize) -> f64 {
    let t = julian_centuries(jd);

    let mean_anomaly = polynomial(&elements.mean_anomaly, t);
    let e = polynomial(&elements.eccentricity, t);
    let perihelion = polynomial(&elements.perihelion_argument, t);

    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..iterations {
        let rad = ecc_anomaly * DEG2RAD;
        ecc_anomaly -= (ecc_anomaly - e * rad.sin() - mean_anomaly) / (1.0 - e * rad.cos());
    }

    // True anomaly from the half-angle tangent identity
    let half_e = ecc_anomaly * DEG2RAD / 2.0;
    let true_anomaly = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * half_e.tan()).atan() * RAD2DEG;

    normalize_degrees(true_anomaly + perihelion)
}

/// Zodiac-anchored house index in [1, 12]
///
/// This is the absolute convention of the reference engine: houses are
/// fixed 30-degree buckets offset one sign from 0 Aries, independent of the
/// ascendant. For the ascendant-anchored alternative see
/// [`crate::chart::HouseCusps::house_of`].
pub fn absolute_house_of(longitude: f64) -> u8 {
    let lon = normalize_degrees(longitude);
    let bucket = ((lon + 30.0) / 30.0).floor() as i64;
    (bucket.rem_euclid(12) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_solar_mean_anomaly_at_j2000() {
        // T = 0 leaves only the constant term
        assert_relative_eq!(solar_mean_anomaly(J2000), 357.52911);
    }

    #[test]
    fn test_solar_longitude_at_j2000() {
        // The Sun sits in late Capricorn at the J2000 epoch, ~280.4 degrees
        let lon = solar_longitude(J2000);
        assert!((279.0..282.0).contains(&lon), "solar longitude {}", lon);
    }

    #[rstest]
    #[case(Body::Sun)]
    #[case(Body::Moon)]
    #[case(Body::Mercury)]
    #[case(Body::Venus)]
    #[case(Body::Mars)]
    #[case(Body::Jupiter)]
    #[case(Body::Saturn)]
    #[case(Body::Uranus)]
    #[case(Body::Neptune)]
    #[case(Body::Pluto)]
    fn test_longitude_in_range(#[case] body: Body) {
        for offset in 0..60 {
            let jd = J2000 + offset as f64 * 617.3;
            let lon = body.longitude(jd);
            assert!(
                (0.0..360.0).contains(&lon),
                "{} out of range at jd {}: {}",
                body.name(),
                jd,
                lon
            );
        }
    }

    #[test]
    fn test_kepler_iteration_count_insensitive() {
        // 5 fixed iterations must land where 8 would; sweep mean anomalies
        // by sampling dates across several Mercury orbits.
        for offset in 0..90 {
            let jd = J2000 + offset as f64;
            let five = kepler_longitude(&MERCURY_ELEMENTS, jd, 5);
            let eight = kepler_longitude(&MERCURY_ELEMENTS, jd, 8);
            let delta = (five - eight).abs().min(360.0 - (five - eight).abs());
            assert!(delta < 0.05, "jd {}: 5 iters {} vs 8 iters {}", jd, five, eight);
        }
    }

    #[test]
    fn test_mean_motion_wraps_with_period() {
        let model = PositionModel::MeanMotion { period_days: 100.0 };
        let base = model.longitude(1_000_000.0);
        assert_relative_eq!(model.longitude(1_000_100.0), base, epsilon = 1e-6);
        assert_relative_eq!(
            model.longitude(1_000_025.0),
            normalize_degrees(base + 90.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_absolute_house_rule() {
        // 0 Aries falls in house 2 under the absolute convention
        assert_eq!(absolute_house_of(0.0), 2);
        assert_eq!(absolute_house_of(29.9), 2);
        assert_eq!(absolute_house_of(30.0), 3);
        // The last sign wraps to house 1
        assert_eq!(absolute_house_of(330.0), 1);
        assert_eq!(absolute_house_of(359.9), 1);
    }

    #[test]
    fn test_absolute_house_wrap_invariance() {
        for k in [-2i32, -1, 1, 3] {
            let shifted = 123.45 + 360.0 * k as f64;
            assert_eq!(absolute_house_of(shifted), absolute_house_of(123.45));
        }
    }

    #[test]
    fn test_body_names_and_symbols() {
        assert_eq!(Body::ALL.len(), 10);
        assert_eq!(Body::Sun.name(), "sun");
        assert_eq!(Body::Sun.symbol(), "\u{2609}");
        assert_eq!(Body::Pluto.symbol(), "\u{2647}");
    }
}
