use snafu::{Snafu, ensure};

use crate::types::{Point, Rectangle};

pub type Result<T> = std::result::Result<T, Error>;

/// A strategy that turns a rectangle into its rotated bounding rectangle.
///
/// Implementations rotate in screen coordinates (y pointing down), so positive angles
/// turn clockwise on screen.
pub trait Rotation {
    fn rotate(&self, rectangle: &Rectangle) -> Rectangle;
}

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Rotation {what} must be finite, got {value:?}"))]
    NonFinite { what: &'static str, value: f64 },
}

/// Leaves every rectangle as it is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoRotation;

impl Rotation for NoRotation {
    fn rotate(&self, rectangle: &Rectangle) -> Rectangle {
        *rectangle
    }
}

/// Multiples of a right angle, measured clockwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RightAngle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl RightAngle {
    /// Maps an angle in degrees to a right angle, or `None` if it is not a multiple of
    /// 90 degrees.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() || degrees % 90.0 != 0.0 {
            return None;
        }

        // quotient stays exact for any multiple of 90, so reduce it without an integer cast
        match (degrees / 90.0).rem_euclid(4.0) as u8 {
            0 => Some(RightAngle::Deg0),
            1 => Some(RightAngle::Deg90),
            2 => Some(RightAngle::Deg180),
            _ => Some(RightAngle::Deg270),
        }
    }

    pub fn degrees(&self) -> f64 {
        match self {
            RightAngle::Deg0 => 0.0,
            RightAngle::Deg90 => 90.0,
            RightAngle::Deg180 => 180.0,
            RightAngle::Deg270 => 270.0,
        }
    }
}

/// Exact rotation by a multiple of 90 degrees around a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterTurn {
    angle: RightAngle,
    pivot: Point,
}

impl QuarterTurn {
    /// # Errors
    /// Returns [`Error::NonFinite`] if a pivot coordinate is NaN or infinite.
    pub fn new(angle: RightAngle, pivot: Point) -> Result<Self> {
        check_pivot(&pivot)?;

        Ok(Self { angle, pivot })
    }

    pub fn angle(&self) -> RightAngle {
        self.angle
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn rotate_point(&self, point: &Point) -> Point {
        let dx = point.x() - self.pivot.x();
        let dy = point.y() - self.pivot.y();
        let (px, py) = (self.pivot.x(), self.pivot.y());

        match self.angle {
            RightAngle::Deg0 => *point,
            RightAngle::Deg90 => Point::new(px - dy, py + dx),
            RightAngle::Deg180 => Point::new(px - dx, py - dy),
            RightAngle::Deg270 => Point::new(px + dy, py - dx),
        }
    }
}

impl Rotation for QuarterTurn {
    fn rotate(&self, rectangle: &Rectangle) -> Rectangle {
        if self.angle == RightAngle::Deg0 {
            return *rectangle;
        }

        Rectangle::enclosing(rectangle.corners().map(|corner| self.rotate_point(&corner)))
    }
}

/// Rotation by an arbitrary angle around a pivot.
///
/// The result is the envelope of the four rotated corners. Angles that are multiples of
/// 90 degrees are handled by [`QuarterTurn`] and give exact results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRotation {
    degrees: f64,
    pivot: Point,
    sin: f64,
    cos: f64,
    exact: Option<QuarterTurn>,
}

impl AngleRotation {
    /// # Errors
    /// Returns [`Error::NonFinite`] if the angle or a pivot coordinate is NaN or infinite.
    pub fn new(degrees: f64, pivot: Point) -> Result<Self> {
        ensure!(
            degrees.is_finite(),
            NonFinite {
                what: "angle",
                value: degrees,
            }
        );
        check_pivot(&pivot)?;

        let (sin, cos) = degrees.to_radians().sin_cos();
        let exact = RightAngle::from_degrees(degrees)
            .map(|angle| QuarterTurn::new(angle, pivot))
            .transpose()?;

        Ok(Self {
            degrees,
            pivot,
            sin,
            cos,
            exact,
        })
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn rotate_point(&self, point: &Point) -> Point {
        if let Some(turn) = &self.exact {
            return turn.rotate_point(point);
        }

        let dx = point.x() - self.pivot.x();
        let dy = point.y() - self.pivot.y();

        Point::new(
            self.pivot.x() + dx * self.cos - dy * self.sin,
            self.pivot.y() + dx * self.sin + dy * self.cos,
        )
    }
}

impl Rotation for AngleRotation {
    fn rotate(&self, rectangle: &Rectangle) -> Rectangle {
        if let Some(turn) = &self.exact {
            return turn.rotate(rectangle);
        }

        Rectangle::enclosing(rectangle.corners().map(|corner| self.rotate_point(&corner)))
    }
}

fn check_pivot(pivot: &Point) -> Result<()> {
    ensure!(
        pivot.x().is_finite(),
        NonFinite {
            what: "pivot x",
            value: pivot.x(),
        }
    );
    ensure!(
        pivot.y().is_finite(),
        NonFinite {
            what: "pivot y",
            value: pivot.y(),
        }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::SQRT_2;

    fn rect(left: f64, top: f64, right: f64, bottom: f64) -> Rectangle {
        Rectangle::new(left, top, right, bottom).unwrap()
    }

    fn assert_close(actual: &Rectangle, expected: &Rectangle) {
        let pairs = [
            (actual.left(), expected.left()),
            (actual.top(), expected.top()),
            (actual.right(), expected.right()),
            (actual.bottom(), expected.bottom()),
        ];
        for (a, e) in pairs {
            assert!((a - e).abs() < 1e-9, "{actual} is not close to {expected}");
        }
    }

    #[test]
    fn test_right_angle_from_degrees() {
        #[derive(Debug)]
        struct TestCase {
            degrees: f64,
            expected: Option<RightAngle>,
        }

        let test_cases = [
            TestCase {
                degrees: 0.0,
                expected: Some(RightAngle::Deg0),
            },
            TestCase {
                degrees: 90.0,
                expected: Some(RightAngle::Deg90),
            },
            TestCase {
                degrees: 540.0,
                expected: Some(RightAngle::Deg180),
            },
            TestCase {
                degrees: -90.0,
                expected: Some(RightAngle::Deg270),
            },
            TestCase {
                degrees: 360.0,
                expected: Some(RightAngle::Deg0),
            },
            TestCase {
                degrees: 90.0 * 2f64.powi(70),
                expected: Some(RightAngle::Deg0),
            },
            TestCase {
                degrees: 90.0 * (2f64.powi(40) + 3.0),
                expected: Some(RightAngle::Deg270),
            },
            TestCase {
                degrees: -90.0 * 2f64.powi(70),
                expected: Some(RightAngle::Deg0),
            },
            TestCase {
                degrees: 45.0,
                expected: None,
            },
            TestCase {
                degrees: f64::NAN,
                expected: None,
            },
        ];

        for case in test_cases {
            assert_eq!(
                RightAngle::from_degrees(case.degrees),
                case.expected,
                "{} degrees",
                case.degrees
            );
        }
    }

    #[snafu::report]
    #[test]
    fn test_quarter_turn() -> Result<()> {
        let rectangle = rect(0.0, 0.0, 4.0, 2.0);

        let turn = QuarterTurn::new(RightAngle::Deg90, Point::ORIGIN)?;
        assert_eq!(turn.rotate_point(&Point::new(4.0, 0.0)), Point::new(0.0, 4.0));
        assert_eq!(rectangle.rotate(&turn), rect(-2.0, 0.0, 0.0, 4.0));

        let half = QuarterTurn::new(RightAngle::Deg180, rectangle.center())?;
        assert_eq!(rectangle.rotate(&half), rectangle);

        let three_quarters = QuarterTurn::new(RightAngle::Deg270, Point::ORIGIN)?;
        assert_eq!(rectangle.rotate(&three_quarters), rect(0.0, -4.0, 2.0, 0.0));

        let none = QuarterTurn::new(RightAngle::Deg0, Point::new(7.0, 7.0))?;
        assert_eq!(rectangle.rotate(&none), rectangle);

        Ok(())
    }

    #[test]
    fn test_quarter_turn_rejects_non_finite_pivot() {
        let err = QuarterTurn::new(RightAngle::Deg90, Point::new(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, Error::NonFinite { what: "pivot x", .. }));

        let err =
            QuarterTurn::new(RightAngle::Deg0, Point::new(0.0, f64::NEG_INFINITY)).unwrap_err();
        assert!(matches!(err, Error::NonFinite { what: "pivot y", .. }));
    }

    #[snafu::report]
    #[test]
    fn test_quarter_turn_of_unbounded_rectangle() -> Result<()> {
        let half_plane = rect(0.0, f64::NEG_INFINITY, 1.0, f64::INFINITY);
        let turn = QuarterTurn::new(RightAngle::Deg90, Point::ORIGIN)?;

        let rotated = half_plane.rotate(&turn);
        assert_eq!(
            rotated,
            rect(f64::NEG_INFINITY, 0.0, f64::INFINITY, 1.0)
        );

        Ok(())
    }

    #[snafu::report]
    #[test]
    fn test_quarter_turn_round_trip() -> Result<()> {
        let rectangle = rect(1.0, 2.0, 5.0, 3.0);
        let turn = QuarterTurn::new(RightAngle::Deg90, Point::new(1.0, 1.0))?;

        let rotated = rectangle
            .rotate(&turn)
            .rotate(&turn)
            .rotate(&turn)
            .rotate(&turn);
        assert_eq!(rotated, rectangle);
        assert_ne!(rectangle.rotate(&turn), rectangle);

        Ok(())
    }

    #[snafu::report]
    #[test]
    fn test_angle_rotation() -> Result<()> {
        let square = rect(-1.0, -1.0, 1.0, 1.0);

        let rotation = AngleRotation::new(45.0, Point::ORIGIN)?;
        assert_eq!(rotation.degrees(), 45.0);
        assert_close(&square.rotate(&rotation), &rect(-SQRT_2, -SQRT_2, SQRT_2, SQRT_2));

        let rotation = AngleRotation::new(30.0, Point::new(10.0, 10.0))?;
        let rotated = rect(10.0, 10.0, 12.0, 10.0).rotate(&rotation);
        assert_close(&rotated, &rect(10.0, 10.0, 10.0 + 3f64.sqrt(), 11.0));

        Ok(())
    }

    #[snafu::report]
    #[test]
    fn test_angle_rotation_right_angles_are_exact() -> Result<()> {
        let rectangle = rect(0.0, 0.0, 4.0, 2.0);
        let pivot = Point::new(1.0, 3.0);

        for degrees in [0.0, 90.0, 180.0, 270.0, -90.0, 450.0] {
            let angle = RightAngle::from_degrees(degrees).unwrap();
            assert_eq!(
                rectangle.rotate(&AngleRotation::new(degrees, pivot)?),
                rectangle.rotate(&QuarterTurn::new(angle, pivot)?),
                "{degrees} degrees"
            );
        }

        Ok(())
    }

    #[test]
    fn test_angle_rotation_rejects_non_finite() {
        let err = AngleRotation::new(f64::NAN, Point::ORIGIN).unwrap_err();
        assert!(matches!(err, Error::NonFinite { what: "angle", .. }));

        let err = AngleRotation::new(10.0, Point::new(f64::INFINITY, 0.0)).unwrap_err();
        assert_eq!(err.to_string(), "Rotation pivot x must be finite, got inf");

        assert!(AngleRotation::new(10.0, Point::new(0.0, f64::NAN)).is_err());
    }

    #[snafu::report]
    #[test]
    fn test_angle_rotation_of_unbounded_rectangle() -> Result<()> {
        let plane = rect(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        );
        let rotated = plane.rotate(&AngleRotation::new(45.0, Point::ORIGIN)?);

        assert!(rotated.left() <= rotated.right());
        assert!(rotated.top() <= rotated.bottom());
        assert_eq!(rotated, plane);

        Ok(())
    }

    #[snafu::report]
    #[test]
    fn test_rotation_as_trait_object() -> Result<()> {
        let rectangle = rect(0.0, 0.0, 4.0, 2.0);
        let strategies: Vec<Box<dyn Rotation>> = vec![
            Box::new(NoRotation),
            Box::new(QuarterTurn::new(RightAngle::Deg90, Point::ORIGIN)?),
        ];

        let results: Vec<Rectangle> = strategies
            .iter()
            .map(|strategy| rectangle.rotate(strategy.as_ref()))
            .collect();
        assert_eq!(results, vec![rectangle, rect(-2.0, 0.0, 0.0, 4.0)]);

        Ok(())
    }
}
