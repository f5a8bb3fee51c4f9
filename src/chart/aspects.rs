//! Aspect detection between chart bodies
//!
//! Every unordered pair of bodies is checked once, in canonical body order,
//! against the five classical aspect angles. A pair matches an aspect when
//! its angular separation falls within the shared 8-degree orb.

use serde::Serialize;

use crate::constants::ASPECT_ORB_DEG;
use crate::ephemeris::Body;

use super::PlanetPosition;

/// The five classical aspect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// All aspect kinds, in ascending angle order
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// The exact separation this aspect names, in degrees
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Get the aspect's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

/// An aspect between two distinct bodies.
///
/// `body_a` always precedes `body_b` in [`Body::ALL`] order, so each
/// unordered pair appears at most once per aspect kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Absolute deviation from the exact aspect angle, in degrees
    pub orb: f64,
}

/// Angular separation of two ecliptic longitudes, in [0, 180]
pub fn separation(lon_a: f64, lon_b: f64) -> f64 {
    let delta = (lon_a - lon_b).abs() % 360.0;
    delta.min(360.0 - delta)
}

/// Detect all aspects between the given planet positions.
///
/// Positions are expected in [`Body::ALL`] order (as `compute_chart`
/// produces them); output ordering follows the pair iteration order.
pub fn detect_aspects(planets: &[PlanetPosition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();

    for i in 0..planets.len() {
        for j in (i + 1)..planets.len() {
            let sep = separation(planets[i].longitude, planets[j].longitude);

            for kind in AspectKind::ALL {
                let orb = (sep - kind.angle()).abs();
                if orb <= ASPECT_ORB_DEG {
                    aspects.push(Aspect {
                        body_a: planets[i].body,
                        body_b: planets[j].body,
                        kind,
                        orb,
                    });
                }
            }
        }
    }

    aspects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ZodiacSign;
    use crate::ephemeris::absolute_house_of;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn position(body: Body, longitude: f64) -> PlanetPosition {
        PlanetPosition {
            body,
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
            house: absolute_house_of(longitude),
        }
    }

    #[test]
    fn test_exact_opposition() {
        let planets = vec![position(Body::Sun, 10.0), position(Body::Moon, 190.0)];
        let aspects = detect_aspects(&planets);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Opposition);
        assert_eq!(aspects[0].body_a, Body::Sun);
        assert_eq!(aspects[0].body_b, Body::Moon);
        assert_relative_eq!(aspects[0].orb, 0.0);
    }

    #[test]
    fn test_ten_degrees_from_opposition_is_nothing() {
        let planets = vec![position(Body::Sun, 0.0), position(Body::Moon, 170.0)];
        assert!(detect_aspects(&planets).is_empty());
    }

    #[rstest]
    #[case(AspectKind::Conjunction, 3.0)]
    #[case(AspectKind::Sextile, 62.5)]
    #[case(AspectKind::Square, 95.0)]
    #[case(AspectKind::Trine, 113.0)]
    #[case(AspectKind::Opposition, 174.5)]
    fn test_aspect_within_orb(#[case] kind: AspectKind, #[case] sep: f64) {
        let planets = vec![position(Body::Venus, 40.0), position(Body::Mars, 40.0 + sep)];
        let aspects = detect_aspects(&planets);
        assert_eq!(aspects.len(), 1, "expected a single {} hit", kind.name());
        assert_eq!(aspects[0].kind, kind);
        assert_relative_eq!(aspects[0].orb, (sep - kind.angle()).abs(), epsilon = 1e-12);
    }

    #[test]
    fn test_separation_symmetric_and_wrapping() {
        assert_relative_eq!(separation(350.0, 10.0), 20.0);
        assert_relative_eq!(separation(10.0, 350.0), 20.0);
        assert_relative_eq!(separation(0.0, 180.0), 180.0);
        assert_relative_eq!(separation(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_orb_boundary_inclusive() {
        // Exactly 8 degrees off is still an aspect; just past it is not
        let hit = detect_aspects(&[position(Body::Sun, 0.0), position(Body::Moon, 68.0)]);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].kind, AspectKind::Sextile);

        let miss = detect_aspects(&[position(Body::Sun, 0.0), position(Body::Moon, 68.5)]);
        assert!(miss.is_empty());
    }

    #[test]
    fn test_windows_do_not_overlap() {
        // With an 8-degree orb no separation can satisfy two aspect kinds,
        // so every pair yields at most one record.
        let mut sep = 0.0;
        while sep <= 180.0 {
            let matches = AspectKind::ALL
                .iter()
                .filter(|kind| (sep - kind.angle()).abs() <= ASPECT_ORB_DEG)
                .count();
            assert!(matches <= 1, "separation {} matches {} kinds", sep, matches);
            sep += 0.25;
        }
    }
}
