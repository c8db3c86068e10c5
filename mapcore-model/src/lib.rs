//! Immutable screen-space geometry for map rendering: points, axis-aligned rectangles
//! and rotation strategies, plus parsing of both from coordinate text.

mod parser;
mod types;

pub use parser::Error as ParseError;
pub use types::{
    AngleRotation, Axis, GeometryError, NoRotation, Point, QuarterTurn, Rectangle, RightAngle,
    Rotation, RotationError,
};
