//! Low-precision lunar longitude series
//!
//! Degree-4 polynomials give the Moon's mean longitude and the four
//! fundamental arguments (mean elongation D, solar mean anomaly M, lunar
//! mean anomaly M', argument of latitude F); the longitude is the mean
//! longitude plus a truncated periodic series in integer combinations of
//! those arguments. Amplitudes are stored in millionths of a degree.
//!
//! This is classical low-precision lunar theory (ELP2000-derived), good to
//! roughly a hundredth of a degree — far beyond what the chart needs.

use crate::constants::{normalize_degrees, DEG2RAD};
use crate::time::julian_centuries;

/// One periodic term: amplitude in 1e-6 degrees and the integer multiples
/// of (D, M, M', F) forming the sine argument
struct LunarTerm {
    amplitude: f64,
    d: i32,
    m: i32,
    m_prime: i32,
    f: i32,
}

const fn term(amplitude: f64, d: i32, m: i32, m_prime: i32, f: i32) -> LunarTerm {
    LunarTerm { amplitude, d, m, m_prime, f }
}

/// Principal longitude terms of the lunar series
const LONGITUDE_TERMS: [LunarTerm; 48] = [
    term(6_288_774.0, 0, 0, 1, 0),
    term(1_274_027.0, 2, 0, -1, 0),
    term(658_314.0, 2, 0, 0, 0),
    term(213_618.0, 0, 0, 2, 0),
    term(-185_116.0, 0, 1, 0, 0),
    term(-114_332.0, 0, 0, 0, 2),
    term(58_793.0, 2, 0, -2, 0),
    term(57_066.0, 2, -1, -1, 0),
    term(53_322.0, 2, 0, 1, 0),
    term(45_758.0, 2, -1, 0, 0),
    term(-40_923.0, 0, 1, -1, 0),
    term(-34_720.0, 1, 0, 0, 0),
    term(-30_383.0, 0, 1, 1, 0),
    term(15_327.0, 2, 0, 0, -2),
    term(-12_528.0, 0, 0, 1, 2),
    term(10_980.0, 0, 0, 1, -2),
    term(10_675.0, 4, 0, -1, 0),
    term(10_034.0, 0, 0, 3, 0),
    term(8_548.0, 4, 0, -2, 0),
    term(-7_888.0, 2, 1, -1, 0),
    term(-6_766.0, 2, 1, 0, 0),
    term(-5_163.0, 1, 0, -1, 0),
    term(4_987.0, 1, 1, 0, 0),
    term(4_036.0, 2, -1, 1, 0),
    term(3_994.0, 2, 0, 2, 0),
    term(3_861.0, 4, 0, 0, 0),
    term(3_665.0, 2, 0, -3, 0),
    term(-2_689.0, 0, 1, -2, 0),
    term(-2_602.0, 2, 0, -1, 2),
    term(2_390.0, 2, -1, -2, 0),
    term(-2_348.0, 1, 0, 1, 0),
    term(2_236.0, 2, -2, 0, 0),
    term(-2_120.0, 0, 1, 2, 0),
    term(-2_069.0, 0, 2, 0, 0),
    term(2_048.0, 2, -2, -1, 0),
    term(-1_773.0, 2, 0, 1, -2),
    term(-1_595.0, 2, 0, 0, 2),
    term(1_215.0, 4, -1, -1, 0),
    term(-1_110.0, 0, 0, 2, 2),
    term(-892.0, 3, 0, -1, 0),
    term(-810.0, 2, 1, 1, 0),
    term(759.0, 4, -1, -2, 0),
    term(-713.0, 0, 2, -1, 0),
    term(-700.0, 2, 2, -1, 0),
    term(691.0, 2, 1, -2, 0),
    term(596.0, 2, -1, 0, -2),
    term(549.0, 4, 0, 1, 0),
    term(537.0, 0, 0, 4, 0),
];

/// Mean longitude of the Moon in degrees (not normalized)
fn mean_longitude(t: f64) -> f64 {
    218.3164477 + 481_267.88123421 * t - 0.0015786 * t * t + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0
}

/// Mean elongation of the Moon from the Sun in degrees
fn mean_elongation(t: f64) -> f64 {
    297.8501921 + 445_267.1114034 * t - 0.0018819 * t * t + t * t * t / 545_868.0
        - t * t * t * t / 113_065_000.0
}

/// Mean anomaly of the Sun in degrees
fn solar_anomaly(t: f64) -> f64 {
    357.5291092 + 35_999.0502909 * t - 0.0001536 * t * t + t * t * t / 24_490_000.0
}

/// Mean anomaly of the Moon in degrees
fn lunar_anomaly(t: f64) -> f64 {
    134.9633964 + 477_198.8675055 * t + 0.0087414 * t * t + t * t * t / 69_699.0
        - t * t * t * t / 14_712_000.0
}

/// Argument of latitude of the Moon in degrees
fn argument_of_latitude(t: f64) -> f64 {
    93.272095 + 483_202.0175233 * t - 0.0036539 * t * t - t * t * t / 3_526_000.0
        + t * t * t * t / 863_310_000.0
}

/// Ecliptic longitude of the Moon in degrees, range [0, 360)
pub fn lunar_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    let d = mean_elongation(t);
    let m = solar_anomaly(t);
    let m_prime = lunar_anomaly(t);
    let f = argument_of_latitude(t);

    let periodic: f64 = LONGITUDE_TERMS
        .iter()
        .map(|row| {
            let argument = row.d as f64 * d
                + row.m as f64 * m
                + row.m_prime as f64 * m_prime
                + row.f as f64 * f;
            row.amplitude * (argument * DEG2RAD).sin()
        })
        .sum();

    normalize_degrees(mean_longitude(t) + periodic * 1e-6)
}
