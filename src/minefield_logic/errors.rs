use strum_macros::Display;

#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum Error {
    InvalidDimensions,
    InvalidBombCount,
    OutOfBounds,
}

impl std::error::Error for Error {}
