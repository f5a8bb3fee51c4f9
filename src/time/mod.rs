//! Time module for chart time calculations
//!
//! Converts a local birth moment into a Julian Day on the UT scale and
//! derives Greenwich/local mean sidereal time from it. The local-to-UTC step
//! takes an explicit offset in minutes; nothing here consults the host
//! environment's timezone.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::constants::{normalize_degrees, J2000, JULIAN_CENTURY};

/// A birth moment on the local clock, before UTC normalization.
///
/// `chrono` naive types keep invalid calendar dates unrepresentable, so the
/// downstream Julian Day arithmetic stays total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl LocalMoment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Apply an explicit UTC offset (minutes east of Greenwich) to obtain
    /// the corresponding UTC instant. Day rollover is handled by chrono.
    pub fn to_utc(&self, utc_offset_minutes: i32) -> NaiveDateTime {
        self.date.and_time(self.time) - Duration::minutes(utc_offset_minutes as i64)
    }
}

/// Convert a UTC instant to a Julian Day on the UT scale.
///
/// Standard proleptic-Gregorian algorithm: integer Julian Day Number at noon
/// plus the fraction of the day.
pub fn julian_day(utc: NaiveDateTime) -> f64 {
    let year = utc.year();
    let month = utc.month() as i64;
    let day = utc.day() as i64;

    let a = (14 - month) / 12;
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    let hour_fraction =
        utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;

    jdn as f64 + (hour_fraction - 12.0) / 24.0
}

/// Julian centuries elapsed since J2000.0 for a given Julian Day
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY
}

/// Greenwich mean sidereal time in degrees, range [0, 360)
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let d = jd - J2000;
    let t = julian_centuries(jd);
    let theta = 280.46061837 + 360.98564736629 * d + t * t * (0.000387933 - t / 38_710_000.0);
    normalize_degrees(theta)
}

/// Local mean sidereal time in degrees for an observer at the given
/// geographic longitude (degrees, east positive), range [0, 360)
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_time(jd) + longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_julian_day_j2000() {
        // Noon UTC on 2000-01-01 is the J2000.0 epoch by definition
        assert_eq!(julian_day(datetime(2000, 1, 1, 12, 0)), 2451545.0);
        assert_eq!(julian_centuries(2451545.0), 0.0);
    }

    #[test]
    fn test_julian_day_known_dates() {
        assert_eq!(julian_day(datetime(2000, 1, 1, 0, 0)), 2451544.5);
        assert_eq!(julian_day(datetime(1969, 7, 20, 12, 0)), 2440423.0);
        assert_eq!(julian_day(datetime(1900, 1, 1, 0, 0)), 2415020.5);
        assert_eq!(julian_day(datetime(2020, 1, 1, 0, 0)), 2458849.5);
    }

    #[test]
    fn test_julian_day_time_fraction() {
        let base = julian_day(datetime(2000, 1, 1, 12, 0));
        let plus_six_hours = julian_day(datetime(2000, 1, 1, 18, 0));
        assert_relative_eq!(plus_six_hours - base, 0.25);

        // The operands sit near 2.45e6, so the difference only carries
        // about 1e-9 of absolute precision
        let with_minutes = julian_day(datetime(2000, 1, 1, 12, 30));
        assert_relative_eq!(with_minutes - base, 30.0 / 1440.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_utc_offset_subtraction() {
        // 14:30 at UTC+2 is 12:30 UTC
        let local = LocalMoment::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        );
        assert_eq!(local.to_utc(120), datetime(2000, 1, 1, 12, 30));
    }

    #[test]
    fn test_to_utc_day_rollover() {
        // 00:30 at UTC+2 falls on the previous UTC day
        let local = LocalMoment::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(0, 30, 0).unwrap(),
        );
        assert_eq!(local.to_utc(120), datetime(1999, 12, 31, 22, 30));

        // Negative offsets roll forward
        let late = LocalMoment::new(
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        );
        assert_eq!(late.to_utc(-120), datetime(2000, 1, 1, 1, 0));
    }

    #[test]
    fn test_sidereal_time_range() {
        for offset in 0..100 {
            let jd = 2451545.0 + offset as f64 * 37.25;
            let gst = greenwich_sidereal_time(jd);
            assert!((0.0..360.0).contains(&gst), "GST out of range: {}", gst);
        }
    }

    #[test]
    fn test_sidereal_time_j2000() {
        // At J2000.0 the polynomial reduces to its constant term
        assert_relative_eq!(greenwich_sidereal_time(2451545.0), 280.46061837);
    }

    #[test]
    fn test_local_sidereal_time_longitude_shift() {
        let jd = 2451545.0;
        let gst = greenwich_sidereal_time(jd);
        assert_relative_eq!(
            local_sidereal_time(jd, 90.0),
            normalize_degrees(gst + 90.0)
        );
        assert_relative_eq!(
            local_sidereal_time(jd, -90.0),
            normalize_degrees(gst - 90.0)
        );
    }
}
