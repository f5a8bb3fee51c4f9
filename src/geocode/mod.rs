//! Geocoding collaborator
//!
//! Resolves free-text place names to coordinate candidates through the
//! OpenStreetMap Nominatim search API. This module is the one place in the
//! crate that performs I/O; the chart engine never calls it — callers
//! geocode first and hand coordinates to [`crate::chart::compute_chart`].

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Nominatim search endpoint
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Request timeout for geocoding lookups
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for geocoding operations
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("No places found matching the query")]
    NotFound,

    #[error("Geocoding request timed out")]
    Timeout,

    #[error("Geocoding service error: {0}")]
    Service(String),

    #[error("Malformed geocoding response: {0}")]
    Malformed(String),
}

/// Result type for geocoding operations
pub type Result<T> = std::result::Result<T, GeocodeError>;

/// A candidate place returned by the geocoder
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub display_name: String,
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
}

/// One row of the Nominatim JSON response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimRow {
    display_name: String,
    lat: String,
    lon: String,
}

/// A blocking Nominatim client
pub struct Geocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Geocoder {
    /// Create a geocoder against the public Nominatim endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Create a geocoder against a custom endpoint (test servers, mirrors)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        // Nominatim's usage policy requires an identifying user agent
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("natalis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodeError::Service(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Search for a place by free-text name.
    ///
    /// Returns candidate places deduplicated by normalized display name,
    /// in the order the service ranked them, or `NotFound` when the query
    /// matched nothing.
    pub fn search(&self, query: &str) -> Result<Vec<Place>> {
        log::debug!("geocoding query: {}", query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::Timeout
                } else {
                    GeocodeError::Service(format!("request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodeError::Service(format!(
                "unexpected status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| GeocodeError::Service(format!("failed to read response: {}", e)))?;

        let places = parse_places(&body)?;
        if places.is_empty() {
            return Err(GeocodeError::NotFound);
        }

        log::debug!("geocoding query '{}' matched {} places", query, places.len());
        Ok(places)
    }
}

/// Parse a Nominatim JSON body into deduplicated places
fn parse_places(body: &str) -> Result<Vec<Place>> {
    let rows: Vec<NominatimRow> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Malformed(e.to_string()))?;

    let mut seen = Vec::new();
    let mut places = Vec::new();

    for row in rows {
        let latitude: f64 = row
            .lat
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("bad latitude: {}", row.lat)))?;
        let longitude: f64 = row
            .lon
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("bad longitude: {}", row.lon)))?;

        let key = normalize_name(&row.display_name);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        places.push(Place {
            display_name: row.display_name,
            latitude,
            longitude,
        });
    }

    Ok(places)
}

/// Normalize a display name for deduplication: lowercase with collapsed
/// whitespace
fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_places() {
        let body = r#"[
            {"display_name": "Paris, France", "lat": "48.8566", "lon": "2.3522"},
            {"display_name": "Paris, Texas, USA", "lat": "33.6609", "lon": "-95.5555"}
        ]"#;
        let places = parse_places(body).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].display_name, "Paris, France");
        assert!((places[0].latitude - 48.8566).abs() < 1e-9);
        assert!((places[1].longitude - (-95.5555)).abs() < 1e-9);
    }

    #[test]
    fn test_parse_places_dedupes_by_normalized_name() {
        let body = r#"[
            {"display_name": "Paris,  France", "lat": "48.8566", "lon": "2.3522"},
            {"display_name": "paris, france", "lat": "48.8567", "lon": "2.3523"},
            {"display_name": "Paris, Texas, USA", "lat": "33.6609", "lon": "-95.5555"}
        ]"#;
        let places = parse_places(body).unwrap();
        assert_eq!(places.len(), 2);
        // First occurrence wins
        assert_eq!(places[0].display_name, "Paris,  France");
    }

    #[test]
    fn test_parse_places_empty_is_ok_here() {
        // The NotFound mapping happens in `search`; the parser itself
        // passes empty result sets through.
        assert!(parse_places("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_places_malformed() {
        assert!(matches!(
            parse_places("not json"),
            Err(GeocodeError::Malformed(_))
        ));
        let bad_coord = r#"[{"display_name": "X", "lat": "north", "lon": "0"}]"#;
        assert!(matches!(
            parse_places(bad_coord),
            Err(GeocodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Paris,   France "), "paris, france");
        assert_eq!(normalize_name("PARIS"), "paris");
    }
}
