//! Geographic primitives: great-circle distance and planar centroid.
//!
//! Straight-line geometry only. Accurate enough for route-local work
//! (points within tens to low hundreds of km); not meaningful near the
//! poles or across the antimeridian.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position in decimal degrees.
///
/// No range validation is performed; callers supply geocoded values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine formula. Symmetric up to floating-point rounding, and
/// exactly zero for identical inputs.
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of latitudes and longitudes.
///
/// Planar approximation, not a spherical centroid. Errors on an empty
/// input rather than inventing a position.
pub fn centroid(points: &[Coordinate]) -> Result<Coordinate, InvalidInput> {
    if points.is_empty() {
        return Err(InvalidInput::EmptyPointSet);
    }

    let n = points.len() as f64;
    let lat_sum: f64 = points.iter().map(|p| p.lat).sum();
    let lon_sum: f64 = points.iter().map(|p| p.lon).sum();

    Ok(Coordinate {
        lat: lat_sum / n,
        lon: lon_sum / n,
    })
}
