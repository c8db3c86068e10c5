use std::str::FromStr;

use clap::{Parser, Subcommand};
use mapcore_model::{ParseError, Point, Rectangle};

/// Runs rectangle operations on coordinates given as `left,top,right,bottom` and points
/// given as `x,y`.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maximum level of log events written to stderr
    #[arg(long, global = true, default_value = "error")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the rectangle with its size and center
    Info {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
    },
    /// Check whether the rectangle contains a point or another rectangle
    Contains {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        target: Target,
    },
    /// Check whether two rectangles overlap or touch
    Intersects {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        other: Rectangle,
    },
    /// Check whether a circle touches the rectangle
    Circle {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        radius: f64,
    },
    /// Move every side outwards by its own amount
    Enlarge {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        left: f64,
        #[arg(allow_hyphen_values = true)]
        top: f64,
        #[arg(allow_hyphen_values = true)]
        right: f64,
        #[arg(allow_hyphen_values = true)]
        bottom: f64,
    },
    /// Move every side outwards by the same padding
    Envelope {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        padding: f64,
    },
    /// Smallest rectangle enclosing four points
    Bounds {
        #[arg(allow_hyphen_values = true)]
        a: Point,
        #[arg(allow_hyphen_values = true)]
        b: Point,
        #[arg(allow_hyphen_values = true)]
        c: Point,
        #[arg(allow_hyphen_values = true)]
        d: Point,
    },
    /// Translate the rectangle by an offset
    Shift {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        offset: Point,
    },
    /// Clamp clip coordinates to a horizontal and vertical bound
    Clamp {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        #[arg(allow_hyphen_values = true)]
        horizontal: f64,
        #[arg(allow_hyphen_values = true)]
        vertical: f64,
    },
    /// Rotate the rectangle and print its bounding rectangle
    Rotate {
        #[arg(allow_hyphen_values = true)]
        rectangle: Rectangle,
        /// Clockwise angle in degrees
        #[arg(long, allow_hyphen_values = true)]
        degrees: f64,
        /// Pivot point, defaults to the rectangle center
        #[arg(long, allow_hyphen_values = true)]
        pivot: Option<Point>,
    },
}

/// Either a point (`x,y`) or a rectangle (`left,top,right,bottom`).
#[derive(Debug, Clone)]
pub enum Target {
    Point(Point),
    Rectangle(Rectangle),
}

impl FromStr for Target {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Point>() {
            Ok(point) => Ok(Target::Point(point)),
            Err(_) => s.parse().map(Target::Rectangle),
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
