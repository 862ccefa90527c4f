//! Command parser.
//!
//! Turns one input line into a structured [`Command`]. The command word is
//! everything before the first space; the remainder is its argument string.

use crate::board::Move;
use crate::error::ProtocolError;

/// A parsed manager-to-brain command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `START <size>`: square board
    Start { size: i32 },

    /// `RECTSTART <w>,<h>`: rectangular board
    RectStart { width: i32, height: i32 },

    /// Clear the board, same dimensions
    Restart,

    /// Brain plays the first move
    Begin,

    /// Opponent played at the given square
    Turn(Move),

    /// Start of a position block terminated by `DONE`
    Board,

    /// `INFO <key> <value>`
    Info { key: String, value: String },

    About,

    End,
}

/// One `x,y,field` row of a `BOARD` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRow {
    pub mv: Move,
    pub field: i32,
}

/// Strip trailing whitespace the way managers send it (`\r\n`, tabs, spaces).
pub fn trim_line(line: &str) -> &str {
    line.trim_end_matches([' ', '\n', '\r', '\t'])
}

/// Split a line into its command word and argument string.
pub fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((cmd, args)) => (cmd, args),
        None => (line, ""),
    }
}

/// Parses a single (already trimmed, non-empty) line into a `Command`.
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let (cmd, args) = split_command(line);

    match cmd {
        "START" => Ok(Command::Start {
            size: parse_int(args)?,
        }),
        "RECTSTART" => {
            let (width, height) = parse_pair(args)?;
            Ok(Command::RectStart { width, height })
        }
        "RESTART" => Ok(Command::Restart),
        "BEGIN" => Ok(Command::Begin),
        "TURN" => {
            let (x, y) = parse_pair(args)?;
            Ok(Command::Turn(Move::new(x, y)))
        }
        "BOARD" => Ok(Command::Board),
        "INFO" => parse_info(args),
        "ABOUT" => Ok(Command::About),
        "END" => Ok(Command::End),
        other => Err(ProtocolError::UnknownCommand(other.to_string())),
    }
}

/// Parses `INFO <key> <value>`.
fn parse_info(args: &str) -> Result<Command, ProtocolError> {
    let (key, value) = split_command(args.trim_start());
    if key.is_empty() {
        return Err(ProtocolError::MissingArgument("INFO"));
    }
    Ok(Command::Info {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}

/// Parses one `x,y,field` line inside a `BOARD` block.
pub fn parse_board_row(line: &str) -> Result<BoardRow, ProtocolError> {
    let invalid = || ProtocolError::InvalidBoardRow(line.to_string());

    let parts: Vec<&str> = line.split(',').collect();
    let [x, y, field] = parts.as_slice() else {
        return Err(invalid());
    };

    let x = parse_int(x).map_err(|_| invalid())?;
    let y = parse_int(y).map_err(|_| invalid())?;
    let field = parse_int(field).map_err(|_| invalid())?;

    Ok(BoardRow {
        mv: Move::new(x, y),
        field,
    })
}

/// Parses `a,b`.
pub fn parse_pair(args: &str) -> Result<(i32, i32), ProtocolError> {
    let (a, b) = args
        .split_once(',')
        .ok_or_else(|| ProtocolError::InvalidPair(args.to_string()))?;
    let a = parse_int(a).map_err(|_| ProtocolError::InvalidPair(args.to_string()))?;
    let b = parse_int(b).map_err(|_| ProtocolError::InvalidPair(args.to_string()))?;
    Ok((a, b))
}

/// Parses a decimal integer, surrounding whitespace allowed.
pub fn parse_int(raw: &str) -> Result<i32, ProtocolError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ProtocolError::InvalidNumber(raw.to_string()))
}
