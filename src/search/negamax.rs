//! Fixed-depth negamax search with alpha-beta pruning
//!
//! The searcher mutates the board in place: each candidate is placed, the
//! child is searched, and the cell is cleared again before the next
//! candidate. On return the board is exactly as it was passed in.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Move, Player};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(15, 15).unwrap();
//! board.place(Move::new(7, 7), Player::Opponent);
//!
//! let mut searcher = Searcher::new(2);
//! let result = searcher.search(&mut board);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Move, Player};
use crate::eval::evaluate;

use super::movegen::generate_moves;

/// Infinity score for alpha-beta bounds. Symmetric so negation never overflows.
pub const INF: i64 = i64::MAX;

/// Search result containing the best root move and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any candidate existed
    pub best_move: Option<Move>,
    /// Value of the best move from `Me`'s perspective
    pub score: i64,
    /// Total nodes visited
    pub nodes: u64,
}

/// Negamax searcher with a fixed horizon.
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Plies searched, root move included
    depth: u32,
    nodes: u64,
}

impl Searcher {
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            nodes: 0,
        }
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited since the last `search` started.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search every candidate as `Me` and return the best.
    ///
    /// Ties keep the earliest candidate in generator order.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        let candidates = generate_moves(board);
        self.search_candidates(board, &candidates)
    }

    /// Root search over a given candidate list.
    pub fn search_candidates(&mut self, board: &mut Board, candidates: &[Move]) -> SearchResult {
        self.nodes = 0;

        let mut best_move = None;
        let mut best_value = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &mv in candidates {
            board.place(mv, Player::Me);
            let value = -self.negamax(board, self.depth - 1, -beta, -alpha, Player::Opponent);
            board.remove(mv);

            if best_move.is_none() || value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            if value > alpha {
                alpha = value;
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_value } else { 0 },
            nodes: self.nodes,
        }
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// Returns the value of the position from `player`'s perspective.
    pub fn negamax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i64,
        beta: i64,
        player: Player,
    ) -> i64 {
        self.nodes += 1;

        if depth == 0 {
            return static_value(board, player);
        }

        let moves = generate_moves(board);
        if moves.is_empty() {
            return static_value(board, player);
        }

        let mut best_value = -INF;

        for mv in moves {
            board.place(mv, player);
            let value = -self.negamax(board, depth - 1, -beta, -alpha, player.opponent());
            board.remove(mv);

            if value > best_value {
                best_value = value;
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break;
            }
        }

        best_value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Static evaluation seen from `player`.
#[inline]
fn static_value(board: &Board, player: Player) -> i64 {
    let score = evaluate(board);
    if player == Player::Me {
        score
    } else {
        -score
    }
}
