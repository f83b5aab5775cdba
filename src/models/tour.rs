//! Tour type.

use std::fmt;

use crate::distance::CityDistanceModel;
use crate::error::TspResult;
use crate::evaluation::{closed_length, validate_permutation};

/// A closed tour over every city of a model.
///
/// The sequence is a permutation of `0..n`; the tour implicitly returns from
/// the last city to the first. `length` includes that closing edge.
///
/// A tour borrows the model it was built from and never mutates it.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CityDistanceModel;
/// use u_tsp::models::Tour;
///
/// let model = CityDistanceModel::from_coordinates([(0, 0), (0, 3), (4, 3), (4, 0)]).unwrap();
/// let tour = Tour::new(&model, vec![0, 1, 2, 3]).unwrap();
/// assert_eq!(tour.length(), 14);
/// assert_eq!(tour.start(), 0);
/// assert_eq!(tour.to_string(), "Length: 14, Tour: [0, 1, 2, 3]");
/// ```
#[derive(Debug, Clone)]
pub struct Tour<'a> {
    model: &'a CityDistanceModel,
    sequence: Vec<usize>,
    length: u64,
}

impl<'a> Tour<'a> {
    /// Builds a tour from an explicit visiting order, computing its closed length.
    ///
    /// Fails with a validation error if `sequence` is not a permutation of
    /// the model's city indices.
    pub fn new(model: &'a CityDistanceModel, sequence: Vec<usize>) -> TspResult<Self> {
        validate_permutation(model.num_cities(), &sequence)?;
        let length = closed_length(model, &sequence)?;
        Ok(Self {
            model,
            sequence,
            length,
        })
    }

    /// Assembles a tour whose sequence and length are already known to be
    /// consistent (used by the heuristics).
    pub(crate) fn from_parts(model: &'a CityDistanceModel, sequence: Vec<usize>, length: u64) -> Self {
        debug_assert_eq!(sequence.len(), model.num_cities());
        Self {
            model,
            sequence,
            length,
        }
    }

    /// The model this tour was built from.
    pub fn model(&self) -> &'a CityDistanceModel {
        self.model
    }

    /// City indices in visiting order.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_sequence(self) -> Vec<usize> {
        self.sequence
    }

    /// Total length of the closed tour.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The first city of the sequence.
    pub fn start(&self) -> usize {
        self.sequence[0]
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always `false`: a model has at least 3 cities.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Iterates over the tour's edges `(from, to)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.sequence.len();
        (0..n).map(move |i| (self.sequence[i], self.sequence[(i + 1) % n]))
    }
}

/// Tours are equal when they come from the same model instance and visit
/// the cities in the same order.
impl PartialEq for Tour<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.model, other.model)
            && self.length == other.length
            && self.sequence == other.sequence
    }
}

impl Eq for Tour<'_> {}

impl fmt::Display for Tour<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Length: {}, Tour: {:?}", self.length, self.sequence)
    }
}
