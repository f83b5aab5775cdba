//! Domain model types for the travelling salesman problem.
//!
//! Cities are plain coordinate pairs identified by their index in a
//! [`CityDistanceModel`](crate::distance::CityDistanceModel); a tour is an
//! immutable visiting order over every city, together with its closed length.

mod city;
mod tour;

pub use city::City;
pub use tour::Tour;
