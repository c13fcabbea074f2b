//! Error types for the search engine.

use thiserror::Error;

use crate::core::Outcome;

/// Errors reported synchronously by the engine.
///
/// All variants are deterministic functions of the input: none of them are
/// transient and the engine never retries or substitutes a fallback move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed cell values or a mark distribution no legal game can reach.
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    /// Search was requested on a board that is already won or drawn.
    #[error("game already over: {outcome}")]
    GameAlreadyOver { outcome: Outcome },

    /// A move targets an occupied cell or a cell outside the grid.
    #[error("invalid move: cell ({row}, {col}) is not an empty cell on the board")]
    InvalidMove { row: u8, col: u8 },

    /// The search configuration cannot be run as given.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Stable machine-readable code for the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidBoard { .. } => "INVALID_BOARD",
            Error::GameAlreadyOver { .. } => "GAME_OVER",
            Error::InvalidMove { .. } => "INVALID_MOVE",
            Error::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }

    pub(crate) fn invalid_board(reason: impl Into<String>) -> Self {
        Error::InvalidBoard {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
