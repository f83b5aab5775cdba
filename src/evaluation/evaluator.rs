//! Tour length and permutation checks.

use crate::distance::CityDistanceModel;
use crate::error::{TspError, TspResult};

/// Checks that `sequence` visits each of the `n` cities exactly once.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::validate_permutation;
///
/// assert!(validate_permutation(3, &[2, 0, 1]).is_ok());
/// assert!(validate_permutation(3, &[0, 0, 1]).is_err());
/// ```
pub fn validate_permutation(n: usize, sequence: &[usize]) -> TspResult<()> {
    if sequence.len() != n {
        return Err(TspError::validation(format!(
            "tour visits {} cities, expected {n}",
            sequence.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in sequence {
        TspError::check_index(city, n)?;
        if seen[city] {
            return Err(TspError::validation(format!("city {city} visited twice")));
        }
        seen[city] = true;
    }
    Ok(())
}

/// Length of the closed tour through `sequence`, including the edge from
/// the last city back to the first.
///
/// An empty sequence has length 0. Fails with an index error if the
/// sequence names a city outside the model.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CityDistanceModel;
/// use u_tsp::evaluation::closed_length;
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (1, 0), (2, 0)]).unwrap();
/// assert_eq!(closed_length(&model, &[1, 0, 2]).unwrap(), 4);
/// ```
pub fn closed_length(model: &CityDistanceModel, sequence: &[usize]) -> TspResult<u64> {
    let Some(&first) = sequence.first() else {
        return Ok(0);
    };
    let mut total = 0;
    for pair in sequence.windows(2) {
        total += model.distance(pair[0], pair[1])?;
    }
    let last = sequence[sequence.len() - 1];
    total += model.distance(last, first)?;
    Ok(total)
}
