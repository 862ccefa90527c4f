//! Gomoku AI engine speaking the pbrain manager protocol
//!
//! Plays five-in-a-row on any rectangular board:
//! - Overlines count as five
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation
//! - [`eval`]: Line scoring and position evaluation
//! - [`search`]: Candidate generation and negamax search
//! - [`engine`]: Main AI engine with the tactical cascade
//! - [`protocol`]: Manager protocol parser and session loop
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Engine, Move, Player};
//!
//! let mut engine = Engine::new();
//! engine.initialize(15, 15).unwrap();
//!
//! // Opponent opens, engine answers as Me
//! engine.apply_move(Move::new(7, 7), Player::Opponent);
//! let reply = engine.compute_best_move();
//! println!("engine plays {}", reply);
//! ```
//!
//! # Move Priority
//!
//! 1. Opening move at the centre
//! 2. Immediate winning move
//! 3. Block the opponent's five
//! 4. Strong own threat (open four)
//! 5. Medium own threat
//! 6. No candidates: first empty cell, or `-1,-1` on a full board
//! 7. Negamax with alpha-beta pruning

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Player};
pub use config::{EngineConfig, MatchInfo};
pub use engine::{Decision, Engine, MoveResult};
pub use error::{BoardError, ProtocolError};
