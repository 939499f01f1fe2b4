//! Ranking of nearby points of interest.
//!
//! Candidates come from an external lookup (see `overpass`); this module
//! annotates them with distances, sorts, and caps the result. It never
//! filters or renames categories; the raw tag passes through for the
//! display layer to interpret.

use serde::{Deserialize, Serialize};

use crate::geo::{self, Coordinate};

/// Maximum number of ranked results returned.
pub const MAX_RESULTS: usize = 20;

/// A geo-tagged candidate from an external lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    /// Raw category tag from the source, passed through unchanged.
    pub category: String,
}

/// A candidate annotated with its derived distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPoi {
    pub poi: Poi,
    /// Distance to the primary reference point, in kilometers.
    pub distance_km: f64,
    /// Distance to the secondary reference point (the tour's final
    /// stop), when one was supplied.
    pub end_distance_km: Option<f64>,
}

impl RankedPoi {
    /// The distance the ranking was actually ordered by.
    pub fn sort_distance_km(&self) -> f64 {
        self.end_distance_km.unwrap_or(self.distance_km)
    }
}

/// Annotate, sort, and cap a candidate set.
///
/// Every candidate gets its distance to `primary`; when `secondary` is
/// supplied each also gets a distance to it, and the sort uses that
/// instead, since proximity to where the traveler ends up matters more
/// than proximity to the route's centroid. Ascending, stable (ties keep
/// input order), truncated to [`MAX_RESULTS`].
///
/// An empty candidate set ranks to an empty result; "no POIs found" is
/// a valid outcome, not an error.
pub fn rank_pois(
    candidates: Vec<Poi>,
    primary: Coordinate,
    secondary: Option<Coordinate>,
) -> Vec<RankedPoi> {
    let mut ranked: Vec<RankedPoi> = candidates
        .into_iter()
        .map(|poi| {
            let distance_km = geo::great_circle_km(primary, poi.coordinate);
            let end_distance_km = secondary.map(|end| geo::great_circle_km(end, poi.coordinate));
            RankedPoi {
                poi,
                distance_km,
                end_distance_km,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.sort_distance_km().total_cmp(&b.sort_distance_km()));
    ranked.truncate(MAX_RESULTS);
    ranked
}
