use nom::{
    IResult, Parser,
    sequence::{preceded, separated_pair},
};

use super::numeric::{number, separator};

/// Parses `x,y`.
pub fn point(input: &str) -> IResult<&str, (f64, f64)> {
    separated_pair(number, separator, number).parse(input)
}

/// Parses `left,top,right,bottom`.
pub fn rectangle(input: &str) -> IResult<&str, (f64, f64, f64, f64)> {
    (
        number,
        preceded(separator, number),
        preceded(separator, number),
        preceded(separator, number),
    )
        .parse(input)
}
