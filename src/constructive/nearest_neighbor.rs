//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single path greedily: starting from the start city, always
//! extend the open end with the nearest city not yet visited, then close the
//! path back to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use log::trace;

use super::chain::SuccessorChain;
use super::ConstructiveHeuristic;
use crate::distance::CityDistanceModel;
use crate::error::{TspError, TspResult};
use crate::models::Tour;

/// Nearest-neighbor tour construction.
///
/// Ties are broken in favour of the lowest city index.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CityDistanceModel;
/// use u_tsp::constructive::{ConstructiveHeuristic, NearestNeighbor};
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (0, 3), (4, 3), (4, 0)]).unwrap();
/// let tour = NearestNeighbor.compute_tour(&model, 0).unwrap();
/// assert_eq!(tour.sequence(), &[0, 1, 2, 3]);
/// assert_eq!(tour.length(), 14);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighbor;

impl ConstructiveHeuristic for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nn"
    }

    fn compute_tour<'a>(&self, model: &'a CityDistanceModel, start: usize) -> TspResult<Tour<'a>> {
        let n = model.num_cities();
        TspError::check_index(start, n)?;

        let mut chain = SuccessorChain::new(n, start);
        let mut tail = start;
        let mut length = 0;

        while let Some((next, d)) = nearest_unvisited(model, &chain, tail) {
            chain.link(tail, next);
            tail = next;
            length += d;
        }

        chain.link(tail, start);
        length += model.distance_unchecked(tail, start);

        trace!("nn from {start}: length {length}");
        Ok(Tour::from_parts(model, chain.into_sequence(start), length))
    }
}

/// Nearest city outside the chain, scanning in ascending index order.
fn nearest_unvisited(
    model: &CityDistanceModel,
    chain: &SuccessorChain,
    from: usize,
) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for city in 0..model.num_cities() {
        if chain.contains(city) {
            continue;
        }
        let d = model.distance_unchecked(from, city);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((city, d));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::ModelConfig;
    use crate::models::City;

    fn rectangle() -> CityDistanceModel {
        CityDistanceModel::from_coordinates([(0, 0), (0, 3), (4, 3), (4, 0)]).expect("valid")
    }

    #[test]
    fn test_nn_rectangle() {
        let model = rectangle();
        let tour = NearestNeighbor.compute_tour(&model, 0).expect("valid start");
        assert_eq!(tour.sequence(), &[0, 1, 2, 3]);
        // 3 + 4 + 3 + 4
        assert_eq!(tour.length(), 14);
    }

    #[test]
    fn test_nn_tie_picks_lowest_index() {
        let model = CityDistanceModel::from_coordinates([(0, 0), (1, 0), (2, 0)]).expect("valid");
        let tour = NearestNeighbor.compute_tour(&model, 1).expect("valid start");
        assert_eq!(tour.sequence(), &[1, 0, 2]);
        // 1 -> 0 (1), 0 -> 2 (2), 2 -> 1 (1)
        assert_eq!(tour.length(), 4);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let model = CityDistanceModel::from_coordinates([(0, 0), (10, 0), (1, 0), (5, 5)]).expect("valid");
        let tour = NearestNeighbor.compute_tour(&model, 0).expect("valid start");
        // 0 -> 2 (1), 2 -> 3 (6.4 -> 6), 3 -> 1 (7.07 -> 7), 1 -> 0 (10)
        assert_eq!(tour.sequence(), &[0, 2, 3, 1]);
        assert_eq!(tour.length(), 1 + 6 + 7 + 10);
    }

    #[test]
    fn test_nn_starts_at_start() {
        let model = rectangle();
        for start in 0..4 {
            let tour = NearestNeighbor.compute_tour(&model, start).expect("valid start");
            assert_eq!(tour.start(), start);
        }
    }

    #[test]
    fn test_nn_invalid_start() {
        let model = rectangle();
        let r = NearestNeighbor.compute_tour(&model, 4);
        assert!(matches!(r, Err(TspError::IndexOutOfBounds { index: 4, len: 4 })));
    }

    #[test]
    fn test_nn_on_demand_matches_matrix() {
        let cities: Vec<City> = [(3, 9), (14, 2), (0, 0), (7, 7), (12, 12), (1, 5), (9, 0)]
            .into_iter()
            .map(City::from)
            .collect();
        let a = CityDistanceModel::new(cities.clone()).expect("valid");
        let b = CityDistanceModel::with_config(cities, &ModelConfig::on_demand()).expect("valid");
        for start in 0..a.num_cities() {
            let ta = NearestNeighbor.compute_tour(&a, start).expect("valid start");
            let tb = NearestNeighbor.compute_tour(&b, start).expect("valid start");
            assert_eq!(ta.sequence(), tb.sequence());
            assert_eq!(ta.length(), tb.length());
        }
    }

    #[test]
    fn test_nn_coincident_cities() {
        let model = CityDistanceModel::from_coordinates([(5, 5), (5, 5), (5, 5)]).expect("valid");
        let tour = NearestNeighbor.compute_tour(&model, 2).expect("valid start");
        assert_eq!(tour.sequence(), &[2, 0, 1]);
        assert_eq!(tour.length(), 0);
    }
}
