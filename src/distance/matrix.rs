//! Dense distance matrix.

use crate::error::{TspError, TspResult};
use crate::models::City;

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Allocation is fallible: very large instances report a resource error
/// instead of aborting the process.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![City::new(0, 0), City::new(3, 4), City::new(6, 8)];
/// let dm = DistanceMatrix::try_from_cities(&cities).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean distance matrix of the given cities.
    ///
    /// Returns [`TspError::Resource`] if `n * n` entries cannot be reserved.
    pub fn try_from_cities(cities: &[City]) -> TspResult<Self> {
        Self::try_from_cities_within(cities, usize::MAX)
    }

    /// Like [`try_from_cities`](Self::try_from_cities), but also fails with
    /// [`TspError::Resource`] when the matrix would exceed `max_bytes`.
    pub(crate) fn try_from_cities_within(cities: &[City], max_bytes: usize) -> TspResult<Self> {
        let n = cities.len();
        let requested = n
            .checked_mul(n)
            .ok_or(TspError::Resource { requested: usize::MAX })?;
        let bytes = requested.saturating_mul(std::mem::size_of::<u64>());
        if bytes > max_bytes {
            return Err(TspError::Resource { requested });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(requested)
            .map_err(|_| TspError::Resource { requested })?;
        data.resize(requested, 0);

        let mut dm = Self { data, size: n };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: u64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![City::new(0, 0), City::new(3, 4), City::new(0, 8)]
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::try_from_cities(&sample_cities()).expect("small matrix");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(0, 2), 8);
        assert_eq!(dm.get(1, 2), 5);
        assert_eq!(dm.get(0, 0), 0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::try_from_cities(&sample_cities()).expect("small matrix");
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_diagonal_is_zero() {
        let dm = DistanceMatrix::try_from_cities(&sample_cities()).expect("small matrix");
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0);
        }
    }

    #[test]
    fn test_byte_budget() {
        let cities = sample_cities();
        let r = DistanceMatrix::try_from_cities_within(&cities, 9 * 8 - 1);
        assert!(matches!(r, Err(TspError::Resource { requested: 9 })));
        let dm = DistanceMatrix::try_from_cities_within(&cities, 9 * 8).expect("fits budget");
        assert_eq!(dm.get(0, 2), 8);
    }

    #[test]
    fn test_distance_wider_than_u32() {
        let cities = vec![City::new(0, 0), City::new(u32::MAX, u32::MAX), City::new(1, 1)];
        let dm = DistanceMatrix::try_from_cities(&cities).expect("small matrix");
        assert!(dm.get(0, 1) > u64::from(u32::MAX));
        assert_eq!(dm.get(0, 1), cities[0].distance_to(&cities[1]));
    }

    #[test]
    fn test_matches_city_distance() {
        let cities = vec![City::new(1, 1), City::new(10, 3), City::new(7, 12), City::new(2, 9)];
        let dm = DistanceMatrix::try_from_cities(&cities).expect("small matrix");
        for (i, a) in cities.iter().enumerate() {
            for (j, b) in cities.iter().enumerate() {
                assert_eq!(dm.get(i, j), a.distance_to(b));
            }
        }
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::try_from_cities(&[]).expect("empty matrix");
        assert_eq!(dm.size(), 0);
        assert!(dm.is_symmetric());
    }
}
