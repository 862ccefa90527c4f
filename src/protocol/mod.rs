//! Manager protocol handling.
//!
//! Line-oriented text protocol spoken with a Gomoku tournament manager:
//! the command parser and the session loop that drives the engine.

pub mod parser;
pub mod session;

pub use parser::{parse_board_row, parse_command, BoardRow, Command};
pub use session::{Session, ABOUT};
