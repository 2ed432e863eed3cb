use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
}

/// Why a board configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rows must be positive")]
    NonPositiveRows,
    #[error("columns must be positive")]
    NonPositiveCols,
    #[error("mine count must not be negative")]
    NegativeMines,
    #[error("{mines} mines do not leave a safe cell on a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("{field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },
}

pub type Result<T> = core::result::Result<T, GameError>;
