//! Seeded random instances for tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::{CityDistanceModel, ModelConfig};
use crate::error::TspResult;
use crate::models::City;

/// `n` cities with coordinates drawn uniformly from `0..=extent`.
///
/// The same seed always yields the same cities.
///
/// # Examples
///
/// ```
/// use u_tsp::io::random_cities;
///
/// let a = random_cities(50, 1000, 42);
/// let b = random_cities(50, 1000, 42);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|c| c.x() <= 1000 && c.y() <= 1000));
/// ```
pub fn random_cities(n: usize, extent: u32, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| City::new(rng.random_range(0..=extent), rng.random_range(0..=extent)))
        .collect()
}

/// A model over [`random_cities`].
pub fn random_model(
    n: usize,
    extent: u32,
    seed: u64,
    config: &ModelConfig,
) -> TspResult<CityDistanceModel> {
    CityDistanceModel::with_config(random_cities(n, extent, seed), config)
}
