use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid shape does not match configured size")]
    InvalidGridShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
