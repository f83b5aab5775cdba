//! Tour statistics over every start city.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constructive::ConstructiveHeuristic;
use crate::distance::CityDistanceModel;
use crate::error::{TspError, TspResult};

/// Optimal tour lengths of the classic TSPLIB instances shipped as `.dat` files.
const KNOWN_OPTIMA: [(&str, u64); 6] = [
    ("att532", 86_729),
    ("rat575", 6_773),
    ("rl1889", 316_536),
    ("u574", 36_905),
    ("u1817", 57_201),
    ("vm1748", 336_556),
];

/// Optimal length of a known benchmark instance, looked up by name
/// (case-insensitive, with or without a `.dat` extension).
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::known_optimum;
///
/// assert_eq!(known_optimum("att532"), Some(86_729));
/// assert_eq!(known_optimum("RAT575.dat"), Some(6_773));
/// assert_eq!(known_optimum("unknown"), None);
/// ```
pub fn known_optimum(instance: &str) -> Option<u64> {
    let name = instance.to_ascii_lowercase();
    let name = name.strip_suffix(".dat").unwrap_or(&name);
    KNOWN_OPTIMA
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, length)| length)
}

/// Aggregate tour lengths of one heuristic run from every start city.
///
/// Runs are sequential; each start is an independent call.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::NearestNeighbor;
/// use u_tsp::distance::CityDistanceModel;
/// use u_tsp::evaluation::TourStats;
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (0, 3), (4, 3), (4, 0)]).unwrap();
/// let stats = TourStats::collect(&NearestNeighbor, &model, Some(14)).unwrap();
/// assert_eq!(stats.runs, 4);
/// assert_eq!(stats.min_length, 14);
/// assert_eq!(stats.max_gap_percent(), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStats {
    /// Short name of the heuristic.
    pub heuristic: String,
    /// Number of tours built (one per city).
    pub runs: usize,
    /// Shortest tour length.
    pub min_length: u64,
    /// Longest tour length.
    pub max_length: u64,
    /// Mean tour length.
    pub mean_length: f64,
    /// First start city that produced `min_length`.
    pub best_start: usize,
    /// First start city that produced `max_length`.
    pub worst_start: usize,
    /// Optimal length for comparison, if known.
    pub known_optimum: Option<u64>,
}

impl TourStats {
    /// Builds one tour from every start city and aggregates their lengths.
    ///
    /// Fails with a validation error if `known_optimum` is zero.
    pub fn collect(
        heuristic: &dyn ConstructiveHeuristic,
        model: &CityDistanceModel,
        known_optimum: Option<u64>,
    ) -> TspResult<Self> {
        if known_optimum == Some(0) {
            return Err(TspError::validation("known optimum must be positive"));
        }

        let n = model.num_cities();
        let mut min = (u64::MAX, 0);
        let mut max = (0, 0);
        let mut total: u128 = 0;

        for start in 0..n {
            let length = heuristic.compute_tour(model, start)?.length();
            if length < min.0 {
                min = (length, start);
            }
            if length > max.0 {
                max = (length, start);
            }
            total += u128::from(length);
        }

        let stats = Self {
            heuristic: heuristic.name().to_string(),
            runs: n,
            min_length: min.0,
            max_length: max.0,
            mean_length: total as f64 / n as f64,
            best_start: min.1,
            worst_start: max.1,
            known_optimum,
        };
        debug!("{stats}");
        Ok(stats)
    }

    /// Excess of `length` over the known optimum, in percent.
    pub fn gap_percent(&self, length: f64) -> Option<f64> {
        self.known_optimum
            .map(|opt| (length / opt as f64 - 1.0) * 100.0)
    }

    /// Gap of the best tour.
    pub fn min_gap_percent(&self) -> Option<f64> {
        self.gap_percent(self.min_length as f64)
    }

    /// Gap of the mean tour length.
    pub fn mean_gap_percent(&self) -> Option<f64> {
        self.gap_percent(self.mean_length)
    }

    /// Gap of the worst tour.
    pub fn max_gap_percent(&self) -> Option<f64> {
        self.gap_percent(self.max_length as f64)
    }
}

impl fmt::Display for TourStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} runs, min {} (start {}), mean {:.1}, max {} (start {})",
            self.heuristic,
            self.runs,
            self.min_length,
            self.best_start,
            self.mean_length,
            self.max_length,
            self.worst_start
        )?;
        if let (Some(min), Some(mean), Some(max)) = (
            self.min_gap_percent(),
            self.mean_gap_percent(),
            self.max_gap_percent(),
        ) {
            write!(f, ", gap {min:.2}% / {mean:.2}% / {max:.2}%")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::{DoubleEndedNearestNeighbor, NearestNeighbor};

    fn line() -> CityDistanceModel {
        CityDistanceModel::from_coordinates([(0, 0), (1, 0), (2, 0), (10, 0)]).expect("valid")
    }

    #[test]
    fn test_known_optimum() {
        assert_eq!(known_optimum("vm1748"), Some(336_556));
        assert_eq!(known_optimum("U1817.DAT"), Some(57_201));
        assert_eq!(known_optimum("att48"), None);
    }

    #[test]
    fn test_collect_line() {
        // Every tour on collinear points has length 2 * span = 20.
        let stats = TourStats::collect(&NearestNeighbor, &line(), None).expect("valid");
        assert_eq!(stats.heuristic, "nn");
        assert_eq!(stats.runs, 4);
        assert_eq!(stats.min_length, 20);
        assert_eq!(stats.max_length, 20);
        assert!((stats.mean_length - 20.0).abs() < 1e-10);
        assert_eq!(stats.best_start, 0);
        assert_eq!(stats.worst_start, 0);
        assert!(stats.min_gap_percent().is_none());
    }

    #[test]
    fn test_collect_scatter() {
        let model = CityDistanceModel::from_coordinates([
            (50, 50), (52, 50), (48, 47), (55, 56), (42, 45), (62, 58), (35, 40), (70, 70),
        ])
        .expect("valid");
        let stats = TourStats::collect(&DoubleEndedNearestNeighbor, &model, Some(90)).expect("valid");
        assert_eq!(stats.runs, 8);
        assert!(stats.min_length <= stats.max_length);
        assert!(stats.min_length as f64 <= stats.mean_length);
        assert!(stats.mean_length <= stats.max_length as f64);
        let best = DoubleEndedNearestNeighbor
            .compute_tour(&model, stats.best_start)
            .expect("valid start");
        assert_eq!(best.length(), stats.min_length);
    }

    #[test]
    fn test_gap() {
        let stats = TourStats::collect(&NearestNeighbor, &line(), Some(16)).expect("valid");
        let gap = stats.min_gap_percent().expect("optimum given");
        assert!((gap - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_optimum_rejected() {
        let r = TourStats::collect(&NearestNeighbor, &line(), Some(0));
        assert!(matches!(r, Err(TspError::Validation { .. })));
    }

    #[test]
    fn test_display() {
        let stats = TourStats::collect(&NearestNeighbor, &line(), Some(16)).expect("valid");
        assert_eq!(
            stats.to_string(),
            "nn: 4 runs, min 20 (start 0), mean 20.0, max 20 (start 0), gap 25.00% / 25.00% / 25.00%"
        );
    }
}
