//! Main AI engine: owns the game board and decides moves
//!
//! Moves are chosen by a priority cascade, stopping at the first tier that
//! yields a move:
//!
//! 1. **Opening**: first move of the game goes to the centre
//! 2. **Immediate win**: a move that completes five
//! 3. **Block**: the square that would complete an opponent five
//! 4. **Strong threat**: a move scoring at least an open four
//! 5. **Medium threat**: a move scoring at least a half-open four
//! 6. **No candidates**: first empty cell, or `(-1, -1)` on a full board
//! 7. **Search**: negamax with alpha-beta over every candidate
//!
//! Tiers 2-5 are one-ply static checks, so forced wins and blocks are found
//! whatever the search depth.
//!
//! # Example
//!
//! ```
//! use gomoku::{Engine, Move, Player};
//!
//! let mut engine = Engine::new();
//! engine.initialize(15, 15).unwrap();
//! engine.set_opening(true);
//! assert_eq!(engine.compute_best_move(), Move::new(7, 7));
//!
//! engine.apply_move(Move::new(8, 8), Player::Opponent);
//! let reply = engine.compute_best_move();
//! assert_eq!(engine.board().get(reply), Some(Player::Me));
//! ```

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::board::{Board, Move, Player};
use crate::config::{EngineConfig, MatchInfo};
use crate::error::BoardError;
use crate::eval::evaluate;
use crate::search::{generate_moves, Searcher};

/// A speculative `Me` stone at or above this score completes five.
pub const WIN_THRESHOLD: i64 = 900_000_000;
/// A speculative `Opponent` stone below this score completes an opponent five.
pub const BLOCK_THRESHOLD: i64 = -800_000_000;
/// Open four or better.
pub const STRONG_THRESHOLD: i64 = 400_000_000;
/// Half-open four or better.
pub const MEDIUM_THRESHOLD: i64 = 100_000_000;

/// Cascade tier that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Centre point on the first move
    Opening,
    /// Completes five
    ImmediateWin,
    /// Occupies the opponent's completing square
    Block,
    /// Reaches the strong-threat threshold
    StrongThreat,
    /// Reaches the medium-threat threshold
    MediumThreat,
    /// No candidate existed; first empty cell
    FirstEmpty,
    /// Board is full or uninitialized
    NoMove,
    /// Full negamax search
    Search,
}

/// Result of a move decision with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move played, or `Move::NONE`
    pub best_move: Move,
    /// Score that decided the move, from `Me`'s perspective
    pub score: i64,
    /// Tier that produced the move
    pub decision: Decision,
    /// Search nodes visited (0 for the static tiers)
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn new(best_move: Move, score: i64, decision: Decision, nodes: u64, start: Instant) -> Self {
        Self {
            best_move,
            score,
            decision,
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Gomoku engine.
///
/// Holds the committed game state. Every move it returns is also committed
/// to its own board as `Me`.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    config: EngineConfig,
    info: MatchInfo,
    /// Next decision is the first move of the game
    opening: bool,
    initialized: bool,
}

impl Engine {
    /// Create an engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::default(),
            config,
            info: MatchInfo::default(),
            opening: false,
            initialized: false,
        }
    }

    /// Start a game on a fresh `width` x `height` board.
    ///
    /// On failure the previous board is kept.
    pub fn initialize(&mut self, width: i32, height: i32) -> Result<(), BoardError> {
        self.board = Board::new(width, height)?;
        self.opening = false;
        self.initialized = true;
        info!(width, height, "board initialized");
        Ok(())
    }

    /// Clear the board, keeping its dimensions.
    pub fn reset(&mut self) {
        self.board.clear();
        self.opening = false;
        debug!("board reset");
    }

    /// Commit a stone.
    ///
    /// Off-board or occupied squares are ignored; the return value tells
    /// whether the stone was placed.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> bool {
        if player == Player::None {
            warn!(%mv, "ignoring move without an owner");
            return false;
        }
        let placed = self.board.place(mv, player);
        if !placed {
            warn!(%mv, ?player, "ignoring move on an invalid square");
        }
        placed
    }

    /// Mark the next decision as the first move of the game.
    pub fn set_opening(&mut self, opening: bool) {
        self.opening = opening;
    }

    /// Decide, commit and return a move for `Me`.
    pub fn compute_best_move(&mut self) -> Move {
        self.compute_best_move_with_stats().best_move
    }

    /// Decide, commit and return a move with details on how it was chosen.
    pub fn compute_best_move_with_stats(&mut self) -> MoveResult {
        let start = Instant::now();
        let result = self.decide(start);
        if !result.best_move.is_none() {
            self.board.place(result.best_move, Player::Me);
        }
        debug!(
            mv = %result.best_move,
            decision = ?result.decision,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move decided"
        );
        result
    }

    fn decide(&mut self, start: Instant) -> MoveResult {
        // 1. Opening
        if self.opening {
            self.opening = false;
            let center = self.board.center();
            if self.board.is_valid(center) {
                return MoveResult::new(center, 0, Decision::Opening, 0, start);
            }
        }

        let candidates = generate_moves(&self.board);

        // 2. Win now
        if let Some((mv, score)) =
            self.first_reaching(&candidates, Player::Me, |s| s >= WIN_THRESHOLD)
        {
            return MoveResult::new(mv, score, Decision::ImmediateWin, 0, start);
        }

        // 3. Block an opponent five on the same square
        if let Some((mv, score)) =
            self.first_reaching(&candidates, Player::Opponent, |s| s < BLOCK_THRESHOLD)
        {
            return MoveResult::new(mv, score, Decision::Block, 0, start);
        }

        // 4-5. Strong then medium threats
        if let Some((mv, score)) =
            self.first_reaching(&candidates, Player::Me, |s| s >= STRONG_THRESHOLD)
        {
            return MoveResult::new(mv, score, Decision::StrongThreat, 0, start);
        }
        if let Some((mv, score)) =
            self.first_reaching(&candidates, Player::Me, |s| s >= MEDIUM_THRESHOLD)
        {
            return MoveResult::new(mv, score, Decision::MediumThreat, 0, start);
        }

        // 6. Nothing adjacent to play
        if candidates.is_empty() {
            return match self.board.first_empty() {
                Some(mv) => MoveResult::new(mv, 0, Decision::FirstEmpty, 0, start),
                None => MoveResult::new(Move::NONE, 0, Decision::NoMove, 0, start),
            };
        }

        // 7. Full search
        let mut searcher = Searcher::new(self.config.search_depth);
        let result = searcher.search_candidates(&mut self.board, &candidates);
        // Candidates are non-empty here, so the search always picks one
        let mv = result.best_move.unwrap_or(candidates[0]);
        MoveResult::new(mv, result.score, Decision::Search, result.nodes, start)
    }

    /// First candidate whose one-ply static score, after a speculative
    /// `player` stone, satisfies `accept`. The board is left unchanged.
    fn first_reaching(
        &mut self,
        candidates: &[Move],
        player: Player,
        accept: impl Fn(i64) -> bool,
    ) -> Option<(Move, i64)> {
        for &mv in candidates {
            self.board.place(mv, player);
            let score = evaluate(&self.board);
            self.board.remove(mv);
            if accept(score) {
                return Some((mv, score));
            }
        }
        None
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn info(&self) -> &MatchInfo {
        &self.info
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut MatchInfo {
        &mut self.info
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
