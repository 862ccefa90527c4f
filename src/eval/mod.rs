//! Evaluation module for Gomoku positions
//!
//! This module provides line recognition and scoring for board positions.
//! The evaluation considers:
//! - Run length (twos, threes, fours, fives)
//! - Open ends on each run
//! - Defensive weighting of opponent runs

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, line_totals, Line, LineTotals, DIRECTIONS};
pub use patterns::{line_score, LineScore, DEFENSE_MULTIPLIER, FIVE, LINE_SCORES, OPEN_FOUR};
