use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An immutable pair of double-precision coordinates.
///
/// Equality and hashing compare the bit patterns of `x` and `y`, so `0.0` and `-0.0`
/// are different points while two NaN values with the same payload are equal.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the vertical coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Euclidean distance between this point and `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns a copy of this point translated by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        if dx == 0.0 && dy == 0.0 {
            return *self;
        }
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:?}, y={:?}", self.x, self.y)
    }
}
