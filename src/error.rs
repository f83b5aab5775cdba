//! Error types for u-tsp.
//!
//! Every fallible operation returns [`TspResult`]. Errors are never retried:
//! they signal invalid input, not transient state.

use thiserror::Error;

/// Result type alias for u-tsp operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for all u-tsp operations.
#[derive(Debug, Error)]
pub enum TspError {
    /// Malformed or missing input: too few cities, unknown heuristic name,
    /// a sequence that is not a permutation, or an invalid configuration.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the violated requirement.
        message: String,
    },

    /// A city index outside `[0, len)`.
    #[error("city index {index} out of bounds for {len} cities")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of cities in the model.
        len: usize,
    },

    /// The dense distance matrix could not be allocated.
    ///
    /// Only [`DistanceMatrix::try_from_cities`](crate::distance::DistanceMatrix::try_from_cities)
    /// returns this; model construction recovers by computing distances on demand.
    #[error("cannot allocate a distance matrix of {requested} entries")]
    Resource {
        /// Number of matrix entries requested.
        requested: usize,
    },

    /// Instance data does not conform to the `.dat` format.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line of the offending token (0 when the input is empty).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Reading instance data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TspError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TspError::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        TspError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns `Ok(index)` when `index < len`, otherwise an index error.
    pub(crate) fn check_index(index: usize, len: usize) -> TspResult<usize> {
        if index < len {
            Ok(index)
        } else {
            Err(TspError::IndexOutOfBounds { index, len })
        }
    }
}
