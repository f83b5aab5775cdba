//! Double-ended nearest-neighbor constructive heuristic.
//!
//! # Algorithm
//!
//! Keeps a path with two open ends, `head` and `tail`, both starting at the
//! start city. Each step picks the unvisited city closest to either end and
//! attaches it there: before `head` or after `tail`. When every city is on
//! the path, `tail` is linked back to `head`.
//!
//! Growing from both ends avoids the long closing edge that plain
//! nearest-neighbor often pays when its single end wanders away.
//!
//! # Complexity
//!
//! O(n²) time (two distance checks per candidate), O(n) extra space.

use log::trace;

use super::chain::SuccessorChain;
use super::ConstructiveHeuristic;
use crate::distance::CityDistanceModel;
use crate::error::{TspError, TspResult};
use crate::models::Tour;

/// Which open end of the path a city attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Head,
    Tail,
}

/// Double-ended nearest-neighbor tour construction.
///
/// Ties are broken by ascending city index, and for one city the head is
/// checked before the tail.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CityDistanceModel;
/// use u_tsp::constructive::{ConstructiveHeuristic, DoubleEndedNearestNeighbor};
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (0, 3), (4, 3), (4, 0)]).unwrap();
/// let tour = DoubleEndedNearestNeighbor.compute_tour(&model, 0).unwrap();
/// assert_eq!(tour.start(), 0);
/// assert_eq!(tour.length(), 14);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleEndedNearestNeighbor;

impl ConstructiveHeuristic for DoubleEndedNearestNeighbor {
    fn name(&self) -> &'static str {
        "denn"
    }

    fn compute_tour<'a>(&self, model: &'a CityDistanceModel, start: usize) -> TspResult<Tour<'a>> {
        let n = model.num_cities();
        TspError::check_index(start, n)?;

        let mut chain = SuccessorChain::new(n, start);
        let mut head = start;
        let mut tail = start;
        let mut length = 0;

        while let Some((city, d, end)) = nearest_to_either_end(model, &chain, head, tail) {
            match end {
                End::Head => {
                    chain.link(city, head);
                    head = city;
                }
                End::Tail => {
                    chain.link(tail, city);
                    tail = city;
                }
            }
            length += d;
        }

        chain.link(tail, head);
        length += model.distance_unchecked(tail, head);

        trace!("denn from {start}: length {length}");
        // The chain is a closed cycle, so walking from `start` rotates it.
        Ok(Tour::from_parts(model, chain.into_sequence(start), length))
    }
}

/// Closest city outside the chain to either end.
///
/// Scans cities in ascending index order; for each city the head distance
/// is compared before the tail distance, and only a strictly shorter
/// distance replaces the current best.
fn nearest_to_either_end(
    model: &CityDistanceModel,
    chain: &SuccessorChain,
    head: usize,
    tail: usize,
) -> Option<(usize, u64, End)> {
    let mut best: Option<(usize, u64, End)> = None;
    for city in 0..model.num_cities() {
        if chain.contains(city) {
            continue;
        }
        for (end, from) in [(End::Head, head), (End::Tail, tail)] {
            let d = model.distance_unchecked(from, city);
            if best.is_none_or(|(_, best_d, _)| d < best_d) {
                best = Some((city, d, end));
            }
        }
    }
    best
}
