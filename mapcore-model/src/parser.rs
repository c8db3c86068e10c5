mod coordinates;
mod numeric;

use std::str::FromStr;

use nom::{Parser, combinator::all_consuming};
use snafu::{ResultExt, Snafu};

use crate::types::{Point, Rectangle};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Parses `x,y`, e.g. `"3, -4.5"`.
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (x, y)) = all_consuming(coordinates::point)
            .parse(s)
            .map_err(|err| error::Error::Malformed {
                expected: "point",
                input: s.to_owned(),
                message: err.to_string(),
            })?;

        Ok(Point::new(x, y))
    }
}

/// Parses `left,top,right,bottom`, e.g. `"-20,-5,5,5"`. The sides are validated like
/// [`Rectangle::new`] does.
impl FromStr for Rectangle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (left, top, right, bottom)) = all_consuming(coordinates::rectangle)
            .parse(s)
            .map_err(|err| error::Error::Malformed {
                expected: "rectangle",
                input: s.to_owned(),
                message: err.to_string(),
            })?;

        Ok(Rectangle::new(left, top, right, bottom).context(error::Geometry { input: s })?)
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)), context(suffix(false)))]
    pub(super) enum Error {
        #[snafu(display("Malformed {expected} '{input}': {message}"))]
        Malformed {
            expected: &'static str,
            input: String,
            message: String,
        },

        #[snafu(display("Rectangle '{input}' is not valid"))]
        Geometry {
            input: String,
            source: crate::types::GeometryError,
        },
    }
}
