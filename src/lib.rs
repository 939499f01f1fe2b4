//! tour-planner core
//!
//! Route planning for field installation trips: geocode addresses,
//! order them into a short round trip with a nearest-neighbor walk,
//! and rank nearby lodging around the route.

pub mod error;
pub mod geo;
pub mod tour;
pub mod poi;
pub mod store;
pub mod traits;
pub mod geocode;
pub mod overpass;
