pub mod point;
pub mod rectangle;
pub mod rotation;

pub use point::Point;
pub use rectangle::{Axis, Rectangle};
pub use rotation::{AngleRotation, NoRotation, QuarterTurn, RightAngle, Rotation};

pub use rectangle::Error as GeometryError;
pub use rotation::Error as RotationError;
