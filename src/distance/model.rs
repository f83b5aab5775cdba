//! City/distance model shared by all heuristics.

use log::{debug, warn};

use super::{DistanceMatrix, ModelConfig};
use crate::error::{TspError, TspResult};
use crate::models::City;

/// Minimum number of cities in a model.
pub const MIN_CITIES: usize = 3;

#[derive(Debug, Clone)]
enum DistanceSource {
    Matrix(DistanceMatrix),
    OnDemand,
}

/// Cities of a TSP instance and the distances between them.
///
/// Distances are rounded Euclidean integers. They come from a precomputed
/// matrix when one could be allocated, otherwise they are computed from the
/// coordinates on every call; both paths return identical values.
///
/// The model is read-only after construction and can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CityDistanceModel;
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (3, 4), (6, 0)]).unwrap();
/// assert_eq!(model.num_cities(), 3);
/// assert_eq!(model.distance(0, 1).unwrap(), 5);
/// assert_eq!(model.coordinates(2).unwrap(), (6, 0));
/// assert!(model.distance(0, 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CityDistanceModel {
    cities: Vec<City>,
    source: DistanceSource,
}

impl CityDistanceModel {
    /// Builds a model with the default configuration.
    ///
    /// Fails with a validation error if fewer than 3 cities are given.
    pub fn new(cities: Vec<City>) -> TspResult<Self> {
        Self::with_config(cities, &ModelConfig::default())
    }

    /// Builds a model from `(x, y)` pairs; city `i` is the `i`-th pair.
    pub fn from_coordinates<I>(coordinates: I) -> TspResult<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        Self::new(coordinates.into_iter().map(City::from).collect())
    }

    /// Builds a model with an explicit configuration.
    ///
    /// A matrix allocation failure is not an error: the model silently
    /// computes distances on demand instead.
    pub fn with_config(cities: Vec<City>, config: &ModelConfig) -> TspResult<Self> {
        Self::with_matrix_budget(cities, config, usize::MAX)
    }

    /// Builds a model whose matrix may use at most `max_bytes`; a larger
    /// matrix takes the same on-demand fallback as an allocation failure.
    pub(crate) fn with_matrix_budget(
        cities: Vec<City>,
        config: &ModelConfig,
        max_bytes: usize,
    ) -> TspResult<Self> {
        config.validate()?;
        let n = cities.len();
        if n < MIN_CITIES {
            return Err(TspError::validation(format!(
                "a model needs at least {MIN_CITIES} cities, got {n}"
            )));
        }

        let source = if config.wants_matrix(n) {
            match DistanceMatrix::try_from_cities_within(&cities, max_bytes) {
                Ok(matrix) => DistanceSource::Matrix(matrix),
                Err(e) => {
                    warn!("{e}; computing distances on demand");
                    DistanceSource::OnDemand
                }
            }
        } else {
            DistanceSource::OnDemand
        };

        let model = Self { cities, source };
        debug!(
            "city distance model: {} cities, {}",
            n,
            if model.has_matrix() { "precomputed matrix" } else { "on-demand distances" }
        );
        Ok(model)
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// All cities, indexed by city number.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city at index `i`.
    pub fn city(&self, i: usize) -> TspResult<City> {
        let i = TspError::check_index(i, self.cities.len())?;
        Ok(self.cities[i])
    }

    /// Coordinates `(x, y)` of city `i`.
    pub fn coordinates(&self, i: usize) -> TspResult<(u32, u32)> {
        self.city(i).map(|c| c.coordinates())
    }

    /// Distance between cities `i` and `j`.
    ///
    /// Fails with an index error if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> TspResult<u64> {
        let n = self.cities.len();
        TspError::check_index(i, n)?;
        TspError::check_index(j, n)?;
        Ok(self.distance_unchecked(i, j))
    }

    /// Distance for indices the caller already knows are in range.
    pub(crate) fn distance_unchecked(&self, i: usize, j: usize) -> u64 {
        match &self.source {
            DistanceSource::Matrix(m) => m.get(i, j),
            DistanceSource::OnDemand => self.cities[i].distance_to(&self.cities[j]),
        }
    }

    /// Returns `true` if distances are served from a precomputed matrix.
    pub fn has_matrix(&self) -> bool {
        matches!(self.source, DistanceSource::Matrix(_))
    }
}
