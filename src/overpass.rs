//! Overpass API adapter for lodging lookup.
//!
//! Queries OpenStreetMap accommodation nodes/ways/relations around a
//! center point and maps them to [`Poi`] candidates. Results are
//! unsorted and untruncated; ranking happens in the `poi` module.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;
use crate::geo::Coordinate;
use crate::poi::Poi;
use crate::traits::PoiSource;

/// OSM tourism values treated as lodging.
const LODGING_REGEX: &str = "^(hotel|guest_house|hostel|motel)$";

#[derive(Debug, Clone)]
pub struct OverpassConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: "https://overpass-api.de/api/interpreter".to_string(),
            timeout_secs: 25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverpassClient {
    config: OverpassConfig,
    client: reqwest::blocking::Client,
}

impl OverpassClient {
    pub fn new(config: OverpassConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl PoiSource for OverpassClient {
    fn find_candidates(
        &self,
        center: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Poi>, LookupError> {
        debug!(
            lat = center.lat,
            lon = center.lon,
            radius_km,
            "searching lodging"
        );

        let query = lodging_query(center, radius_km);
        let response = self
            .client
            .post(&self.config.base_url)
            .form(&[("data", query.as_str())])
            .send()?
            .error_for_status()?
            .json::<OverpassResponse>()?;

        let candidates: Vec<Poi> = response
            .elements
            .iter()
            .filter_map(element_to_poi)
            .collect();

        debug!(count = candidates.len(), "lodging candidates found");
        Ok(candidates)
    }
}

fn lodging_query(center: Coordinate, radius_km: f64) -> String {
    let radius_m = radius_km * 1000.0;
    let around = format!("(around:{},{},{})", radius_m, center.lat, center.lon);
    format!(
        "[out:json][timeout:25];\n(\n  node[\"tourism\"~\"{re}\"]{around};\n  way[\"tourism\"~\"{re}\"]{around};\n  relation[\"tourism\"~\"{re}\"]{around};\n);\nout center meta;",
        re = LODGING_REGEX,
        around = around,
    )
}

fn element_to_poi(element: &Element) -> Option<Poi> {
    let coordinate = element.coordinate()?;
    let tags = &element.tags;

    let name = tags
        .get("name")
        .or_else(|| tags.get("name:en"))
        .cloned()
        .unwrap_or_else(|| "Unnamed Hotel".to_string());
    let category = tags
        .get("tourism")
        .cloned()
        .unwrap_or_else(|| "hotel".to_string());

    Some(Poi {
        name,
        address: assemble_address(tags, coordinate),
        coordinate,
        category,
    })
}

/// Build a display address from `addr:*` tags, falling back to raw
/// coordinates when none are present.
fn assemble_address(tags: &HashMap<String, String>, coordinate: Coordinate) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(street) = tags.get("addr:street") {
        match tags.get("addr:housenumber") {
            Some(number) => parts.push(format!("{} {}", number, street)),
            None => parts.push(street.clone()),
        }
    }
    if let Some(city) = tags.get("addr:city") {
        parts.push(city.clone());
    }
    if let Some(postcode) = tags.get("addr:postcode") {
        parts.push(postcode.clone());
    }

    if parts.is_empty() {
        format!("{:.4}, {:.4}", coordinate.lat, coordinate.lon)
    } else {
        parts.join(", ")
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    #[serde(rename = "type")]
    kind: String,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<Center>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

impl Element {
    /// Nodes carry coordinates directly; ways and relations carry a
    /// computed center. Elements with neither are skipped.
    fn coordinate(&self) -> Option<Coordinate> {
        if self.kind == "node" {
            match (self.lat, self.lon) {
                (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
                _ => None,
            }
        } else {
            self.center
                .as_ref()
                .map(|center| Coordinate::new(center.lat, center.lon))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn node(tag_pairs: &[(&str, &str)]) -> Element {
        Element {
            kind: "node".to_string(),
            lat: Some(45.0),
            lon: Some(9.0),
            center: None,
            tags: tags(tag_pairs),
        }
    }

    #[test]
    fn test_node_uses_direct_coordinates() {
        let poi = element_to_poi(&node(&[("name", "Hotel Roma")])).unwrap();
        assert_eq!(poi.coordinate, Coordinate::new(45.0, 9.0));
        assert_eq!(poi.name, "Hotel Roma");
    }

    #[test]
    fn test_way_uses_center_coordinates() {
        let element = Element {
            kind: "way".to_string(),
            lat: None,
            lon: None,
            center: Some(Center { lat: 45.5, lon: 9.5 }),
            tags: tags(&[("name", "Grand Hotel")]),
        };
        let poi = element_to_poi(&element).unwrap();
        assert_eq!(poi.coordinate, Coordinate::new(45.5, 9.5));
    }

    #[test]
    fn test_element_without_coordinates_is_skipped() {
        let element = Element {
            kind: "relation".to_string(),
            lat: None,
            lon: None,
            center: None,
            tags: tags(&[("name", "Lost Hotel")]),
        };
        assert!(element_to_poi(&element).is_none());
    }

    #[test]
    fn test_name_falls_back_to_english_then_placeholder() {
        let english = element_to_poi(&node(&[("name:en", "Sunrise Inn")])).unwrap();
        assert_eq!(english.name, "Sunrise Inn");

        let unnamed = element_to_poi(&node(&[])).unwrap();
        assert_eq!(unnamed.name, "Unnamed Hotel");
    }

    #[test]
    fn test_category_defaults_to_hotel() {
        let tagged = element_to_poi(&node(&[("tourism", "guest_house")])).unwrap();
        assert_eq!(tagged.category, "guest_house");

        let untagged = element_to_poi(&node(&[])).unwrap();
        assert_eq!(untagged.category, "hotel");
    }

    #[test]
    fn test_address_assembly_from_tags() {
        let poi = element_to_poi(&node(&[
            ("addr:street", "Via Nazionale"),
            ("addr:housenumber", "12"),
            ("addr:city", "Roma"),
            ("addr:postcode", "00184"),
        ]))
        .unwrap();
        assert_eq!(poi.address, "12 Via Nazionale, Roma, 00184");
    }

    #[test]
    fn test_address_falls_back_to_coordinates() {
        let poi = element_to_poi(&node(&[])).unwrap();
        assert_eq!(poi.address, "45.0000, 9.0000");
    }

    #[test]
    fn test_query_scales_radius_to_meters() {
        let query = lodging_query(Coordinate::new(45.0, 9.0), 10.0);
        assert!(query.contains("(around:10000,45,9)"));
        assert!(query.contains("out center meta"));
    }
}
