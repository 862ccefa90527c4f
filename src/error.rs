//! Error types for the engine and the protocol adapter

use thiserror::Error;

/// Errors raised when creating a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("board {width}x{height} exceeds the supported size")]
    TooLarge { width: i32, height: i32 },
}

/// Errors raised while parsing protocol input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("invalid integer: '{0}'")]
    InvalidNumber(String),

    #[error("expected 'x,y', got '{0}'")]
    InvalidPair(String),

    #[error("expected 'x,y,field', got '{0}'")]
    InvalidBoardRow(String),
}
