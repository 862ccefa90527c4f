//! pbrain-gomoku-ai
//!
//! Reads manager commands from stdin and writes replies to stdout.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use gomoku::protocol::Session;
use gomoku::{Engine, EngineConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let engine = Engine::with_config(EngineConfig::from_env());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(engine, stdin.lock(), BufWriter::new(stdout.lock()));

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "i/o failure");
            ExitCode::FAILURE
        }
    }
}
