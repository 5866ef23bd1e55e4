use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must be positive")]
    InvalidDimensions,
}

pub type Result<T> = core::result::Result<T, GameError>;
