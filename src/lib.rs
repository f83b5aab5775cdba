//! # u-tsp
//!
//! Greedy constructive heuristics for the symmetric Euclidean travelling
//! salesman problem on integer coordinates.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour)
//! - [`distance`] — City/distance model with optional precomputed matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Double-Ended Nearest Neighbor)
//! - [`evaluation`] — Tour length checks and per-start statistics
//! - [`io`] — `.dat` instance loading and random instances
//! - [`error`] — Error type shared by all modules
//!
//! ## Example
//!
//! ```
//! use u_tsp::constructive::HeuristicKind;
//! use u_tsp::distance::CityDistanceModel;
//!
//! let model = CityDistanceModel::from_coordinates([(0, 0), (0, 3), (4, 3), (4, 0)]).unwrap();
//! for kind in HeuristicKind::ALL {
//!     let tour = kind.compute_tour(&model, 0).unwrap();
//!     assert_eq!(tour.length(), 14);
//! }
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;

pub use error::{TspError, TspResult};
