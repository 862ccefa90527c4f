//! Protocol session: reads commands, drives the engine, writes replies.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Move, Player};
use crate::config::MatchInfo;
use crate::engine::Engine;
use crate::error::ProtocolError;

use super::parser::{parse_board_row, parse_command, trim_line, Command};

pub const ABOUT: &str = concat!(
    "name=\"pbrain-gomoku-ai\", version=\"",
    env!("CARGO_PKG_VERSION"),
    "\", author=\"pbrain-gomoku-ai developers\", country=\"France\""
);

const START_OK: &str = "OK - everything is good";
const RECTSTART_OK: &str = "OK - parameters are good";
const START_ERROR: &str = "ERROR message - unsupported size or other error";
const RECTSTART_ERROR: &str =
    "ERROR message - rectangular board is not supported or other error";
const MOVE_FORMAT_ERROR: &str = "ERROR message - invalid move format";
const NOT_INITIALIZED_ERROR: &str = "ERROR message - board is not initialized";

/// One manager connection over a line-oriented reader/writer pair.
pub struct Session<R, W> {
    engine: Engine,
    input: R,
    output: W,
    running: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: Engine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            running: true,
        }
    }

    /// Process commands until `END` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while self.running {
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            self.handle_line(&line)?;
        }
        Ok(())
    }

    /// Handle one non-empty command line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<()> {
        debug!(line, "received");
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(ProtocolError::UnknownCommand(_)) => return self.reply("UNKNOWN"),
            Err(err) => {
                warn!(%err, line, "malformed command");
                return match error_reply_for(line) {
                    Some(text) => self.reply(text),
                    None => Ok(()),
                };
            }
        };

        match command {
            Command::Start { size } => self.start(size, size, START_OK, START_ERROR),
            Command::RectStart { width, height } => {
                self.start(width, height, RECTSTART_OK, RECTSTART_ERROR)
            }
            Command::Restart => {
                self.engine.reset();
                self.reply("OK")
            }
            Command::Begin => {
                self.engine.set_opening(true);
                self.play()
            }
            Command::Turn(mv) => {
                if self.engine.is_initialized() {
                    self.engine.apply_move(mv, Player::Opponent);
                }
                self.play()
            }
            Command::Board => self.board_block(),
            Command::Info { key, value } => {
                self.info(&key, &value);
                Ok(())
            }
            Command::About => self.reply(ABOUT),
            Command::End => {
                self.running = false;
                Ok(())
            }
        }
    }

    fn start(&mut self, width: i32, height: i32, ok: &str, error: &str) -> io::Result<()> {
        match self.engine.initialize(width, height) {
            Ok(()) => self.reply(ok),
            Err(err) => {
                warn!(%err, "cannot start game");
                self.reply(error)
            }
        }
    }

    /// Compute, commit and print the engine's move.
    fn play(&mut self) -> io::Result<()> {
        if !self.engine.is_initialized() {
            return self.reply(NOT_INITIALIZED_ERROR);
        }
        let mv: Move = self.engine.compute_best_move();
        self.reply(&mv.to_string())
    }

    /// Read `x,y,field` rows until `DONE`, then play.
    fn board_block(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.read_line()? else {
                // Manager hung up mid-block
                self.running = false;
                return Ok(());
            };
            if line == "DONE" {
                return self.play();
            }
            if line.is_empty() {
                continue;
            }

            let row = match parse_board_row(&line) {
                Ok(row) => row,
                Err(err) => {
                    warn!(%err, "skipping board row");
                    continue;
                }
            };
            let player = match row.field {
                1 => Player::Me,
                2 => Player::Opponent,
                other => {
                    warn!(field = other, mv = %row.mv, "skipping board row with unknown field");
                    continue;
                }
            };
            if self.engine.is_initialized() {
                self.engine.apply_move(row.mv, player);
            }
        }
    }

    fn info(&mut self, key: &str, value: &str) {
        if !MatchInfo::tracks(key) {
            debug!(key, value, "ignoring info");
            return;
        }
        match value.parse::<i64>() {
            Ok(v) => {
                self.engine.info_mut().set(key, v);
            }
            Err(_) => warn!(key, value, "invalid info value"),
        }
    }

    /// Next line from input, trimmed; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line(&buf).to_string()))
    }

    fn reply(&mut self, text: &str) -> io::Result<()> {
        debug!(text, "reply");
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Protocol error line for a malformed command.
///
/// Only the commands that take arguments can be malformed; a bad `INFO` is
/// logged and gets no reply.
fn error_reply_for(line: &str) -> Option<&'static str> {
    match line.split(' ').next() {
        Some("START") => Some(START_ERROR),
        Some("RECTSTART") => Some(RECTSTART_ERROR),
        Some("TURN") => Some(MOVE_FORMAT_ERROR),
        _ => None,
    }
}
