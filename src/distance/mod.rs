//! Distance lookups between cities.
//!
//! [`CityDistanceModel`] is the single entry point used by the heuristics.
//! It owns the cities and either a dense [`DistanceMatrix`] or nothing, in
//! which case distances are recomputed from coordinates.

mod config;
mod matrix;
mod model;

pub use config::{DistanceMode, ModelConfig};
pub use matrix::DistanceMatrix;
pub use model::{CityDistanceModel, MIN_CITIES};
