use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board shape is not square")]
    NonSquareBoard,
    #[error("Cell value is neither empty nor a power of two")]
    InvalidTileValue,
    #[error("Board size does not match the configured size")]
    SizeMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
