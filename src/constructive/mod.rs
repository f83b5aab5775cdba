//! Constructive heuristics for building TSP tours.
//!
//! - [`NearestNeighbor`] — Extend a single open end with the nearest city, O(n²)
//! - [`DoubleEndedNearestNeighbor`] — Extend whichever of two open ends is closer, O(n²)
//!
//! Both are stateless: a call uses only local working storage, so one model
//! can serve any number of concurrent calls.

mod chain;
mod double_ended;
mod nearest_neighbor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use double_ended::DoubleEndedNearestNeighbor;
pub use nearest_neighbor::NearestNeighbor;

use crate::distance::CityDistanceModel;
use crate::error::{TspError, TspResult};
use crate::models::Tour;

/// A heuristic that builds a complete tour in one greedy pass.
///
/// No guarantee is given as to the optimality of the resulting tour.
/// Implementations must be deterministic: the same model and start always
/// yield the same tour.
pub trait ConstructiveHeuristic: Send + Sync {
    /// Short identifier of the heuristic.
    fn name(&self) -> &'static str;

    /// Builds a tour starting (and ending) at city `start`.
    ///
    /// The returned sequence begins with `start`. Fails with an index error
    /// if `start` is not a city of `model`.
    fn compute_tour<'a>(&self, model: &'a CityDistanceModel, start: usize) -> TspResult<Tour<'a>>;
}

/// The available constructive heuristics, selectable by name.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::HeuristicKind;
/// use u_tsp::distance::CityDistanceModel;
///
/// let kind: HeuristicKind = "denn".parse().unwrap();
/// assert_eq!(kind, HeuristicKind::DoubleEndedNearestNeighbor);
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (1, 0), (2, 0)]).unwrap();
/// let tour = kind.compute_tour(&model, 1).unwrap();
/// assert_eq!(tour.length(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    NearestNeighbor,
    DoubleEndedNearestNeighbor,
}

impl HeuristicKind {
    /// Every variant, in declaration order.
    pub const ALL: [HeuristicKind; 2] = [
        HeuristicKind::NearestNeighbor,
        HeuristicKind::DoubleEndedNearestNeighbor,
    ];

    /// Short name (`"nn"` or `"denn"`).
    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::NearestNeighbor => NearestNeighbor.name(),
            HeuristicKind::DoubleEndedNearestNeighbor => DoubleEndedNearestNeighbor.name(),
        }
    }

    /// Descriptive name.
    pub fn full_name(self) -> &'static str {
        match self {
            HeuristicKind::NearestNeighbor => "nearest-neighbor",
            HeuristicKind::DoubleEndedNearestNeighbor => "double-ended-nearest-neighbor",
        }
    }

    /// A boxed instance of the heuristic.
    pub fn heuristic(self) -> Box<dyn ConstructiveHeuristic> {
        match self {
            HeuristicKind::NearestNeighbor => Box::new(NearestNeighbor),
            HeuristicKind::DoubleEndedNearestNeighbor => Box::new(DoubleEndedNearestNeighbor),
        }
    }

    /// Runs the selected heuristic without boxing.
    pub fn compute_tour(self, model: &CityDistanceModel, start: usize) -> TspResult<Tour<'_>> {
        match self {
            HeuristicKind::NearestNeighbor => NearestNeighbor.compute_tour(model, start),
            HeuristicKind::DoubleEndedNearestNeighbor => {
                DoubleEndedNearestNeighbor.compute_tour(model, start)
            }
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = TspError;

    /// Accepts the short name, the descriptive name or the snake_case
    /// variant name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        HeuristicKind::ALL
            .into_iter()
            .find(|k| wanted == k.name() || wanted == k.full_name())
            .ok_or_else(|| {
                TspError::validation(format!(
                    "unknown heuristic '{s}', expected one of: nn, denn"
                ))
            })
    }
}
