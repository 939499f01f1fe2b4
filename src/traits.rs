//! Collaborator seams for the external lookup services.
//!
//! These are intentionally minimal. The planning core never performs
//! I/O itself; it consumes whatever these collaborators resolved.

use crate::error::LookupError;
use crate::geo::Coordinate;
use crate::poi::Poi;

/// Default POI search radius around the route centroid, in kilometers.
pub const DEFAULT_POI_RADIUS_KM: f64 = 10.0;

/// Resolves free-form address text to a coordinate.
pub trait Geocoder {
    /// `Ok(None)` means the service answered but found no match:
    /// an explicit absence, distinct from a transport failure.
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, LookupError>;
}

/// Finds POI candidates around a center point.
pub trait PoiSource {
    /// Candidates within `radius_km` of `center`, unsorted and
    /// untruncated; ordering and limiting are the ranker's job.
    fn find_candidates(
        &self,
        center: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Poi>, LookupError>;
}
