use mapcore_model::{GeometryError, RotationError};
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("{}", source.to_string()))]
    Geometry { source: GeometryError },

    #[snafu(display("{}", source.to_string()))]
    Rotation { source: RotationError },
}
