use std::{
    fmt,
    hash::{Hash, Hasher},
};

use snafu::{Snafu, ensure};

use crate::types::{Point, Rotation};

pub type Result<T> = std::result::Result<T, Error>;

/// An immutable axis-aligned rectangle in screen orientation.
///
/// The y axis points down, so `top` is the smaller and `bottom` the larger vertical
/// coordinate. Every instance satisfies `left <= right` and `top <= bottom`; operations
/// that move the sides return a new rectangle and validate it again.
///
/// Equality and hashing compare the bit patterns of the four coordinates, so rectangles
/// that differ by a single ULP, or by the sign of a zero, are not equal.
///
/// NaN is rejected by every constructing operation. Infinities are accepted but may make
/// predicates degenerate.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

/// The pair of opposite sides a geometry check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `left` and `right`
    Horizontal,
    /// `top` and `bottom`
    Vertical,
}

impl Axis {
    fn low_edge(&self) -> &'static str {
        match self {
            Axis::Horizontal => "left",
            Axis::Vertical => "top",
        }
    }

    fn high_edge(&self) -> &'static str {
        match self {
            Axis::Horizontal => "right",
            Axis::Vertical => "bottom",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
    #[snafu(display(
        "Invalid geometry: {}: {low:?}, {}: {high:?}",
        axis.low_edge(),
        axis.high_edge()
    ))]
    InvalidGeometry { axis: Axis, low: f64, high: f64 },
}

impl Rectangle {
    /// Creates a rectangle from its four sides.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if `left > right` or `top > bottom`, or if any
    /// coordinate is NaN.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        check(left, top, right, bottom)?;

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Creates the smallest rectangle enclosing the four given points.
    ///
    /// The points may be passed in any order; permuting them yields the same rectangle.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if a point carries a NaN coordinate.
    pub fn from_points(a: &Point, b: &Point, c: &Point, d: &Point) -> Result<Self> {
        let left = minimum(a.x(), b.x(), c.x(), d.x());
        let right = maximum(a.x(), b.x(), c.x(), d.x());
        let top = minimum(a.y(), b.y(), c.y(), d.y());
        let bottom = maximum(a.y(), b.y(), c.y(), d.y());

        Self::new(left, top, right, bottom)
    }

    /// Envelope of points produced by a rotation.
    ///
    /// A NaN coordinate comes from rotating an infinite side and leaves that axis
    /// unbounded, so the result always has `left <= right` and `top <= bottom`.
    pub(crate) fn enclosing(points: [Point; 4]) -> Self {
        let (left, top, right, bottom) = points.iter().fold(
            (
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |(left, top, right, bottom), point| {
                let (x_low, x_high) = span(point.x());
                let (y_low, y_high) = span(point.y());
                (
                    left.min(x_low),
                    top.min(y_low),
                    right.max(x_high),
                    bottom.max(y_high),
                )
            },
        );

        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the left edge x-coordinate.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the top edge y-coordinate.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Returns the right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns the width of the rectangle.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the height of the rectangle.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns the horizontal center.
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns the vertical center.
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Returns the point at the horizontal and vertical center.
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Returns the corners clockwise, starting at the top-left one.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Returns `true` if the point lies inside the rectangle or on its boundary.
    pub fn contains(&self, point: &Point) -> bool {
        self.left <= point.x()
            && self.right >= point.x()
            && self.top <= point.y()
            && self.bottom >= point.y()
    }

    /// Returns `true` if `other` lies completely inside this rectangle. Shared sides count
    /// as inside.
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.left <= other.left
            && self.right >= other.right
            && self.top <= other.top
            && self.bottom >= other.bottom
    }

    /// Returns `true` if the rectangles overlap or touch.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// Returns `true` if the circle centered at `(x, y)` touches the rectangle.
    pub fn intersects_circle(&self, x: f64, y: f64, radius: f64) -> bool {
        let half_width = self.width() / 2.0;
        let half_height = self.height() / 2.0;

        let center_distance_x = (x - self.center_x()).abs();
        let center_distance_y = (y - self.center_y()).abs();

        // circle too far away on either axis
        if center_distance_x > half_width + radius || center_distance_y > half_height + radius {
            return false;
        }

        // circle center within the horizontal or vertical span
        if center_distance_x <= half_width || center_distance_y <= half_height {
            return true;
        }

        let corner_distance_x = center_distance_x - half_width;
        let corner_distance_y = center_distance_y - half_height;
        corner_distance_x * corner_distance_x + corner_distance_y * corner_distance_y
            <= radius * radius
    }

    /// Moves each side outwards by its own amount. Negative amounts shrink the rectangle.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if shrinking would make opposite sides cross.
    pub fn enlarge(&self, left: f64, top: f64, right: f64, bottom: f64) -> Result<Rectangle> {
        Rectangle::new(
            self.left - left,
            self.top - top,
            self.right + right,
            self.bottom + bottom,
        )
    }

    /// Moves every side outwards by `padding`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if a negative padding makes opposite sides cross.
    pub fn envelope(&self, padding: f64) -> Result<Rectangle> {
        self.enlarge(padding, padding, padding, padding)
    }

    /// Applies `rotation` to this rectangle. The result can be rotated again.
    pub fn rotate<R: Rotation + ?Sized>(&self, rotation: &R) -> Rectangle {
        rotation.rotate(self)
    }

    /// Translates the rectangle by the coordinates of `origin`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if the offset is NaN, or if an infinite offset
    /// meets an infinite side of the opposite sign.
    pub fn shift(&self, origin: &Point) -> Result<Rectangle> {
        if origin.x() == 0.0 && origin.y() == 0.0 {
            return Ok(*self);
        }

        Rectangle::new(
            self.left + origin.x(),
            self.top + origin.y(),
            self.right + origin.x(),
            self.bottom + origin.y(),
        )
    }

    /// Keeps clip coordinates inside `[-horizontal, horizontal]` x `[-vertical, vertical]`.
    ///
    /// Nothing happens unless the rectangle is wider than `horizontal` or taller than
    /// `vertical`. In that case every side whose magnitude exceeds its bound is replaced by
    /// the bound, keeping its sign.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if a negative bound flips opposite sides.
    pub fn clamp_clip_coordinates(&self, horizontal: f64, vertical: f64) -> Result<Rectangle> {
        if self.width() <= horizontal && self.height() <= vertical {
            return Ok(*self);
        }

        let clamped = Rectangle::new(
            clamp_magnitude(self.left, horizontal),
            clamp_magnitude(self.top, vertical),
            clamp_magnitude(self.right, horizontal),
            clamp_magnitude(self.bottom, vertical),
        )?;

        if clamped != *self {
            tracing::trace!(from = %self, to = %clamped, "clamped clip coordinates");
        }

        Ok(clamped)
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.left.to_bits() == other.left.to_bits()
            && self.top.to_bits() == other.top.to_bits()
            && self.right.to_bits() == other.right.to_bits()
            && self.bottom.to_bits() == other.bottom.to_bits()
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.left.to_bits().hash(state);
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={:?}, top={:?}, right={:?}, bottom={:?}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

fn check(left: f64, top: f64, right: f64, bottom: f64) -> Result<()> {
    ensure!(
        left <= right,
        InvalidGeometry {
            axis: Axis::Horizontal,
            low: left,
            high: right,
        }
    );
    ensure!(
        top <= bottom,
        InvalidGeometry {
            axis: Axis::Vertical,
            low: top,
            high: bottom,
        }
    );

    Ok(())
}

fn span(value: f64) -> (f64, f64) {
    if value.is_nan() {
        (f64::NEG_INFINITY, f64::INFINITY)
    } else {
        (value, value)
    }
}

// Zero is never moved, so a negative bound cannot give it a sign.
fn clamp_magnitude(value: f64, bound: f64) -> f64 {
    if value != 0.0 && value.abs() > bound {
        value.signum() * bound
    } else {
        value
    }
}

fn minimum(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut min = a;
    for value in [b, c, d] {
        if value < min || value.is_nan() {
            min = value;
        }
    }
    min
}

fn maximum(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut max = a;
    for value in [b, c, d] {
        if value > max || value.is_nan() {
            max = value;
        }
    }
    max
}
