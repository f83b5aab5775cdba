//! Tour evaluation.
//!
//! - [`closed_length`], [`validate_permutation`] — check a visiting order
//! - [`TourStats`] — aggregate one heuristic over every start city

mod evaluator;
mod stats;

pub use evaluator::{closed_length, validate_permutation};
pub use stats::{known_optimum, TourStats};
