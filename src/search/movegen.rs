//! Candidate move generation
//!
//! Candidates are empty cells touching at least one stone (8-neighbourhood),
//! ordered closest-to-centre first so alpha-beta sees strong moves early.

use crate::board::{Board, Move, Player};

/// Generate ordered candidate moves.
///
/// Returns an empty list on an empty board; the engine handles that case.
/// Order is ascending squared distance to the board centre, ties broken by
/// row-major position.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Move> {
    let mut moves: Vec<Move> = board
        .cells()
        .filter(|&(mv, p)| p == Player::None && has_neighbor(board, mv))
        .map(|(mv, _)| mv)
        .collect();

    let center = board.center();
    // Stable sort keeps row-major order among equal distances
    moves.sort_by_key(|mv| distance_sq(*mv, center));
    moves
}

/// True when any of the 8 surrounding cells holds a stone.
pub fn has_neighbor(board: &Board, mv: Move) -> bool {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            match board.get(Move::new(mv.x + dx, mv.y + dy)) {
                Some(Player::Me) | Some(Player::Opponent) => return true,
                _ => {}
            }
        }
    }
    false
}

#[inline]
fn distance_sq(a: Move, b: Move) -> i64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    dx * dx + dy * dy
}
