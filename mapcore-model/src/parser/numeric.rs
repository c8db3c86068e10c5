use nom::{
    IResult, Parser,
    character::complete::{char, multispace0},
    number::complete::double,
    sequence::delimited,
};

/// Parses a floating-point number with optional surrounding whitespace.
///
/// Accepts an optional sign, a fractional part and an exponent, e.g. `-12`, `.5` or
/// `1.25e3`.
pub fn number(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0).parse(input)
}

/// Parses the comma between two coordinates.
pub fn separator(input: &str) -> IResult<&str, char> {
    char(',').parse(input)
}
