//! Nominatim HTTP adapter for address geocoding.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::geo::Coordinate;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "tour-planner/0.1".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, LookupError> {
        debug!(address, "geocoding");

        let url = format!("{}/search", self.config.base_url);
        let results = self
            .client
            .get(url)
            .query(&[
                ("format", "json"),
                ("q", address),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()?
            .error_for_status()?
            .json::<Vec<SearchResult>>()?;

        let Some(result) = results.into_iter().next() else {
            warn!(address, "no geocoding result");
            return Ok(None);
        };

        let coordinate = result.coordinate()?;
        debug!(address, lat = coordinate.lat, lon = coordinate.lon, "geocoded");
        Ok(Some(coordinate))
    }
}

/// One match from the Nominatim search endpoint. Lat/lon arrive as
/// JSON strings, not numbers.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl SearchResult {
    fn coordinate(&self) -> Result<Coordinate, LookupError> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| LookupError::Malformed(format!("bad latitude {:?}", self.lat)))?;
        let lon: f64 = self
            .lon
            .parse()
            .map_err(|_| LookupError::Malformed(format!("bad longitude {:?}", self.lon)))?;
        Ok(Coordinate::new(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_parses_string_coordinates() {
        let result = SearchResult {
            lat: "41.9028".to_string(),
            lon: "12.4964".to_string(),
        };
        let coordinate = result.coordinate().unwrap();
        assert_eq!(coordinate, Coordinate::new(41.9028, 12.4964));
    }

    #[test]
    fn test_search_result_rejects_unparseable_latitude() {
        let result = SearchResult {
            lat: "not-a-number".to_string(),
            lon: "12.4964".to_string(),
        };
        assert!(matches!(
            result.coordinate(),
            Err(LookupError::Malformed(_))
        ));
    }
}
