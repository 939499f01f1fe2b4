//! Tour construction via the nearest-neighbor heuristic.
//!
//! Greedy walk from a designated start: always step to the closest
//! unvisited stop. This is a TSP approximation, not a solver: there is
//! no backtracking and no local-search refinement, and the occasionally
//! suboptimal orderings it produces are documented behavior.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::geo::{self, Coordinate};

/// One address on a route.
///
/// The coordinate is absent until geocoding succeeds; the tour builder
/// rejects stops that are still ungeocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub label: String,
    pub coordinate: Option<Coordinate>,
}

impl Stop {
    /// A stop that has not been geocoded yet.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            coordinate: None,
        }
    }

    /// A stop with a known position.
    pub fn at(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate: Some(coordinate),
        }
    }
}

/// Which stop a tour begins at.
///
/// An explicit variant instead of a per-stop boolean flag, so "at most
/// one start" holds structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartSelector {
    /// Begin at the first stop in input order.
    #[default]
    FirstInList,
    /// Begin at the stop at this input index.
    Stop(usize),
}

/// An ordered visiting sequence over a set of stops.
///
/// Always a permutation of the input it was built from: same length,
/// same stops, none duplicated or dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<Stop>,
}

impl Tour {
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Coordinates of the stops in visiting order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.stops.iter().filter_map(|stop| stop.coordinate).collect()
    }

    /// Coordinate of the final stop, if the tour is non-empty.
    pub fn last_coordinate(&self) -> Option<Coordinate> {
        self.stops.last().and_then(|stop| stop.coordinate)
    }

    /// Sum of leg-by-leg great-circle distances, in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|leg| match (leg[0].coordinate, leg[1].coordinate) {
                (Some(a), Some(b)) => geo::great_circle_km(a, b),
                _ => 0.0,
            })
            .sum()
    }
}

/// Build a visiting order over `stops` starting at the selected stop.
///
/// Every stop must carry a coordinate; callers filter out geocoding
/// failures before calling. Inputs of 0, 1, or 2 stops are returned in
/// input order without any search. For larger inputs the nearest
/// unvisited stop is appended repeatedly until the pool is empty;
/// O(n²) distance evaluations, fine for tens of stops.
///
/// Deterministic: the pool keeps input order and only a strictly
/// smaller distance displaces the running best, so exact ties go to the
/// earlier stop.
pub fn build_tour(stops: &[Stop], start: StartSelector) -> Result<Tour, InvalidInput> {
    let mut coordinated: Vec<(&Stop, Coordinate)> = Vec::with_capacity(stops.len());
    for stop in stops {
        match stop.coordinate {
            Some(coordinate) => coordinated.push((stop, coordinate)),
            None => return Err(InvalidInput::UngeocodedStop(stop.label.clone())),
        }
    }

    let start_index = match start {
        StartSelector::FirstInList => 0,
        StartSelector::Stop(index) => {
            if index >= stops.len() {
                return Err(InvalidInput::StartOutOfRange {
                    index,
                    len: stops.len(),
                });
            }
            index
        }
    };

    // 0/1 stops are trivially ordered; a 2-stop tour has only one
    // feasible ordering given a fixed start.
    if stops.len() <= 2 {
        return Ok(Tour {
            stops: stops.to_vec(),
        });
    }

    let mut ordered = Vec::with_capacity(stops.len());
    ordered.push(coordinated[start_index].0.clone());

    let mut pool: Vec<(&Stop, Coordinate)> = coordinated
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != start_index)
        .map(|(_, entry)| *entry)
        .collect();

    let mut current = coordinated[start_index].1;

    while !pool.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_km = geo::great_circle_km(current, pool[0].1);

        for (index, (_, coordinate)) in pool.iter().enumerate().skip(1) {
            let km = geo::great_circle_km(current, *coordinate);
            if km < nearest_km {
                nearest_km = km;
                nearest_index = index;
            }
        }

        let (stop, coordinate) = pool.remove(nearest_index);
        ordered.push(stop.clone());
        current = coordinate;
    }

    Ok(Tour { stops: ordered })
}
