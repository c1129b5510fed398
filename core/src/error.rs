use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimension must be at least 2")]
    InvalidDimension,
    #[error("Mine probability must be strictly between 0 and 1")]
    InvalidProbability,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board snapshot counters disagree with its cells")]
    InconsistentSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;
