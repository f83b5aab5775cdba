//! Model configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// How a [`CityDistanceModel`](super::CityDistanceModel) answers distance queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    /// Precompute a dense matrix; fall back to on-demand computation if it
    /// cannot be allocated.
    #[default]
    Precomputed,

    /// Never build the matrix; compute every distance from coordinates.
    OnDemand,
}

/// Configuration for building a [`CityDistanceModel`](super::CityDistanceModel).
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{DistanceMode, ModelConfig};
///
/// let config = ModelConfig::default()
///     .with_distance_mode(DistanceMode::Precomputed)
///     .with_max_matrix_cities(20_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Distance lookup strategy.
    pub distance_mode: DistanceMode,

    /// Largest instance for which the matrix is attempted. `None` = no cap.
    ///
    /// Above the cap the model behaves as if the allocation had failed.
    pub max_matrix_cities: Option<usize>,
}

impl ModelConfig {
    /// Configuration that never precomputes distances.
    pub fn on_demand() -> Self {
        Self::default().with_distance_mode(DistanceMode::OnDemand)
    }

    pub fn with_distance_mode(mut self, mode: DistanceMode) -> Self {
        self.distance_mode = mode;
        self
    }

    pub fn with_max_matrix_cities(mut self, n: usize) -> Self {
        self.max_matrix_cities = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_matrix_cities == Some(0) {
            return Err(TspError::validation(
                "max_matrix_cities must be positive; use DistanceMode::OnDemand to disable the matrix",
            ));
        }
        Ok(())
    }

    /// Returns `true` if a matrix should be attempted for `n` cities.
    pub(crate) fn wants_matrix(&self, n: usize) -> bool {
        match self.distance_mode {
            DistanceMode::OnDemand => false,
            DistanceMode::Precomputed => !matches!(self.max_matrix_cities, Some(cap) if n > cap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = ModelConfig::default();
        assert_eq!(c.distance_mode, DistanceMode::Precomputed);
        assert!(c.max_matrix_cities.is_none());
        assert!(c.validate().is_ok());
        assert!(c.wants_matrix(1_000_000));
    }

    #[test]
    fn test_on_demand() {
        let c = ModelConfig::on_demand();
        assert_eq!(c.distance_mode, DistanceMode::OnDemand);
        assert!(!c.wants_matrix(3));
    }

    #[test]
    fn test_cap() {
        let c = ModelConfig::default().with_max_matrix_cities(10);
        assert!(c.wants_matrix(10));
        assert!(!c.wants_matrix(11));
    }

    #[test]
    fn test_zero_cap_invalid() {
        let c = ModelConfig::default().with_max_matrix_cities(0);
        assert!(c.validate().is_err());
    }
}
