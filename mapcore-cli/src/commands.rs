use mapcore_model::{AngleRotation, Rectangle};
use snafu::ResultExt;

use crate::{
    cli::{Command, Target},
    error::{self, Result},
};

/// Runs a single command and returns the text to print.
pub fn run(command: &Command) -> Result<String> {
    let output = match command {
        Command::Info { rectangle } => format!(
            "{rectangle}\nwidth={:?}\nheight={:?}\ncenter: {}",
            rectangle.width(),
            rectangle.height(),
            rectangle.center()
        ),
        Command::Contains { rectangle, target } => {
            let contains = match target {
                Target::Point(point) => rectangle.contains(point),
                Target::Rectangle(other) => rectangle.contains_rectangle(other),
            };
            contains.to_string()
        }
        Command::Intersects { rectangle, other } => rectangle.intersects(other).to_string(),
        Command::Circle {
            rectangle,
            x,
            y,
            radius,
        } => rectangle.intersects_circle(*x, *y, *radius).to_string(),
        Command::Enlarge {
            rectangle,
            left,
            top,
            right,
            bottom,
        } => rectangle
            .enlarge(*left, *top, *right, *bottom)
            .context(error::Geometry)?
            .to_string(),
        Command::Envelope { rectangle, padding } => rectangle
            .envelope(*padding)
            .context(error::Geometry)?
            .to_string(),
        Command::Bounds { a, b, c, d } => Rectangle::from_points(a, b, c, d)
            .context(error::Geometry)?
            .to_string(),
        Command::Shift { rectangle, offset } => rectangle
            .shift(offset)
            .context(error::Geometry)?
            .to_string(),
        Command::Clamp {
            rectangle,
            horizontal,
            vertical,
        } => {
            let clamped = rectangle
                .clamp_clip_coordinates(*horizontal, *vertical)
                .context(error::Geometry)?;
            if clamped == *rectangle {
                tracing::debug!(%rectangle, "rectangle already within clip bounds");
            }
            clamped.to_string()
        }
        Command::Rotate {
            rectangle,
            degrees,
            pivot,
        } => {
            let pivot = pivot.unwrap_or_else(|| rectangle.center());
            tracing::debug!(%pivot, degrees, "rotating rectangle");

            let rotation = AngleRotation::new(*degrees, pivot).context(error::Rotation)?;
            rectangle.rotate(&rotation).to_string()
        }
    };

    Ok(output)
}
