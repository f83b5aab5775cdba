//! Loading TSP instances.
//!
//! - [`parse_str`], [`from_reader`], [`from_file`] — `.dat` instance files
//! - [`random_cities`], [`random_model`] — seeded uniform instances

mod dat;
mod generate;

pub use dat::{from_file, from_reader, parse_str, parse_str_with_config};
pub use generate::{random_cities, random_model};
