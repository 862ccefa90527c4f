//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation with centre-first ordering
//! - Fixed-depth negamax with alpha-beta pruning

pub mod movegen;
pub mod negamax;

pub use movegen::{generate_moves, has_neighbor};
pub use negamax::{SearchResult, Searcher, INF};
