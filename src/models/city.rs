//! City type.

use serde::{Deserialize, Serialize};

/// A city on the integer plane.
///
/// Cities carry only their coordinates; identity is the position in the
/// owning [`CityDistanceModel`](crate::distance::CityDistanceModel).
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0, 0);
/// let b = City::new(3, 4);
/// assert_eq!(a.distance_to(&b), 5);
/// assert_eq!(b.x(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    x: u32,
    y: u32,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Coordinates as an `(x, y)` pair.
    pub fn coordinates(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Euclidean distance to another city, rounded half-up to an integer.
    ///
    /// This is the single rounding rule used for every distance in the
    /// crate, whether it is stored in a matrix or computed on demand.
    pub fn distance_to(&self, other: &City) -> u64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        // Non-negative input, so `round` (half away from zero) is half-up.
        dx.hypot(dy).round() as u64
    }
}

impl From<(u32, u32)> for City {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}
