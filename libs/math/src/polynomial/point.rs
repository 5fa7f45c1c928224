//! Point

use num_bigint::BigInt;

/// A sample `(x, y)` of a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: BigInt, y: BigInt) -> Point {
        Point { x, y }
    }

    /// The abscissa.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The ordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Consumes the point and returns the (x, y) coordinates in it.
    pub fn into_coordinates(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Point { x, y }
    }
}
