//! Route state: the address list and its (possibly stale) computed tour.
//!
//! Every mutation of the address list transitions the plan back to
//! `Stale`, so a tour can never be observed alongside addresses it was
//! not built from.

use crate::geo::Coordinate;
use crate::tour::{StartSelector, Stop, Tour};

/// Whether the stored tour still matches the address list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlanState {
    /// The address list changed since the last tour was computed (or no
    /// tour has been computed yet).
    #[default]
    Stale,
    Computed(Tour),
}

/// Holds the current address list, the start selection, and the last
/// computed tour.
#[derive(Debug, Clone, Default)]
pub struct RouteStore {
    stops: Vec<Stop>,
    start: StartSelector,
    plan: PlanState,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn start(&self) -> StartSelector {
        self.start
    }

    /// The computed tour, if it is still current.
    pub fn computed(&self) -> Option<&Tour> {
        match &self.plan {
            PlanState::Computed(tour) => Some(tour),
            PlanState::Stale => None,
        }
    }

    /// Append an address (not yet geocoded). Invalidates the plan.
    pub fn add(&mut self, label: impl Into<String>) {
        self.stops.push(Stop::new(label));
        self.plan = PlanState::Stale;
    }

    /// Attach a coordinate to the stop at `index` after geocoding.
    /// Invalidates the plan.
    pub fn set_coordinate(&mut self, index: usize, coordinate: Coordinate) {
        if let Some(stop) = self.stops.get_mut(index) {
            stop.coordinate = Some(coordinate);
            self.plan = PlanState::Stale;
        }
    }

    /// Remove the stop at `index`. Invalidates the plan and re-anchors
    /// the start selection if it pointed at or past the removed stop.
    pub fn remove(&mut self, index: usize) {
        if index >= self.stops.len() {
            return;
        }
        self.stops.remove(index);
        if let StartSelector::Stop(start) = self.start {
            self.start = if start == index {
                StartSelector::FirstInList
            } else if start > index {
                StartSelector::Stop(start - 1)
            } else {
                self.start
            };
        }
        self.plan = PlanState::Stale;
    }

    /// Drop every stop. Invalidates the plan and resets the start.
    pub fn clear(&mut self) {
        self.stops.clear();
        self.start = StartSelector::FirstInList;
        self.plan = PlanState::Stale;
    }

    /// Designate the stop at `index` as the tour start. Invalidates the
    /// plan. Out-of-range indices are ignored.
    pub fn set_start(&mut self, index: usize) {
        if index < self.stops.len() {
            self.start = StartSelector::Stop(index);
            self.plan = PlanState::Stale;
        }
    }

    /// Record a freshly computed tour for the current address list.
    pub fn set_computed(&mut self, tour: Tour) {
        self.plan = PlanState::Computed(tour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::tour::build_tour;

    fn computed_store() -> RouteStore {
        let mut store = RouteStore::new();
        store.add("a");
        store.add("b");
        store.set_coordinate(0, Coordinate::new(0.0, 0.0));
        store.set_coordinate(1, Coordinate::new(1.0, 1.0));
        let tour = build_tour(store.stops(), store.start()).unwrap();
        store.set_computed(tour);
        store
    }

    #[test]
    fn test_new_store_is_stale() {
        assert!(RouteStore::new().computed().is_none());
    }

    #[test]
    fn test_computed_tour_is_observable() {
        let store = computed_store();
        assert_eq!(store.computed().map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_add_invalidates_plan() {
        let mut store = computed_store();
        store.add("c");
        assert!(store.computed().is_none());
    }

    #[test]
    fn test_remove_invalidates_plan() {
        let mut store = computed_store();
        store.remove(0);
        assert!(store.computed().is_none());
        assert_eq!(store.stops().len(), 1);
    }

    #[test]
    fn test_clear_invalidates_plan_and_resets_start() {
        let mut store = computed_store();
        store.set_start(1);
        store.clear();
        assert!(store.computed().is_none());
        assert_eq!(store.start(), StartSelector::FirstInList);
    }

    #[test]
    fn test_set_start_invalidates_plan() {
        let mut store = computed_store();
        store.set_start(1);
        assert!(store.computed().is_none());
        assert_eq!(store.start(), StartSelector::Stop(1));
    }

    #[test]
    fn test_removing_the_start_stop_falls_back_to_first() {
        let mut store = computed_store();
        store.set_start(1);
        store.remove(1);
        assert_eq!(store.start(), StartSelector::FirstInList);
    }

    #[test]
    fn test_removing_before_the_start_shifts_the_index() {
        let mut store = computed_store();
        store.add("c");
        store.set_coordinate(2, Coordinate::new(2.0, 2.0));
        store.set_start(2);
        store.remove(0);
        assert_eq!(store.start(), StartSelector::Stop(1));
    }
}
