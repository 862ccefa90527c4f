//! Heuristic evaluation function for Gomoku board positions
//!
//! Every line on the board is scored once, from its first stone, using the
//! table in [`super::patterns`]. The result is always from `Me`'s point of
//! view, with opponent lines weighted by [`DEFENSE_MULTIPLIER`].

use crate::board::{Board, Move, Player};

use super::patterns::{line_score, DEFENSE_MULTIPLIER};

/// Direction vectors for line checking (4 directions)
/// Each direction only needs to be checked once (lines are walked forward from their start)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal down-left
];

/// Per-owner sums of line scores, before the defensive weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTotals {
    pub mine: i64,
    pub theirs: i64,
}

impl LineTotals {
    /// Final signed score: `mine - theirs * DEFENSE_MULTIPLIER`
    #[inline]
    pub fn score(self) -> i64 {
        self.mine - self.theirs * DEFENSE_MULTIPLIER
    }
}

/// A maximal run of same-owner stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub owner: Player,
    pub count: usize,
    pub open_ends: usize,
}

/// Evaluate the board from `Me`'s perspective.
///
/// Returns a score where:
/// - Positive values favour `Me`
/// - Negative values favour `Opponent`
#[must_use]
pub fn evaluate(board: &Board) -> i64 {
    line_totals(board).score()
}

/// Sum line scores for both owners.
pub fn line_totals(board: &Board) -> LineTotals {
    let mut totals = LineTotals::default();

    for (pos, owner) in board.stones() {
        for &(dx, dy) in &DIRECTIONS {
            let Some(line) = line_from(board, pos, dx, dy) else {
                continue;
            };
            let value = line_score(line.count, line.open_ends, line.owner);
            match owner {
                Player::Me => totals.mine += value,
                Player::Opponent => totals.theirs += value,
                Player::None => {}
            }
        }
    }

    totals
}

/// Read the line starting at `pos` in direction `(dx, dy)`.
///
/// Returns `None` when `pos` is empty or is not the start of its run
/// (the previous cell has the same owner), so each run is seen once.
pub fn line_from(board: &Board, pos: Move, dx: i32, dy: i32) -> Option<Line> {
    let owner = board.get(pos)?;
    if owner == Player::None {
        return None;
    }

    let prev = board.get(pos.offset(dx, dy, -1));
    if prev == Some(owner) {
        return None;
    }

    let mut count = 0;
    let mut cur = pos;
    while board.get(cur) == Some(owner) {
        count += 1;
        cur = cur.offset(dx, dy, 1);
    }

    // Off the board counts as closed
    let mut open_ends = 0;
    if prev == Some(Player::None) {
        open_ends += 1;
    }
    if board.get(cur) == Some(Player::None) {
        open_ends += 1;
    }

    Some(Line {
        owner,
        count,
        open_ends,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::{FIVE, OPEN_FOUR};

    fn board_with(width: i32, height: i32, stones: &[(i32, i32, Player)]) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for &(x, y, p) in stones {
            board.place(Move::new(x, y), p);
        }
        board
    }

    fn swapped(board: &Board) -> Board {
        let mut out = Board::new(board.width(), board.height()).unwrap();
        for (mv, p) in board.stones() {
            out.place(mv, p.opponent());
        }
        out
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(15, 15).unwrap();
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_single_stone_scores_nothing() {
        let board = board_with(15, 15, &[(7, 7, Player::Me)]);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_open_two_counted_once() {
        let board = board_with(15, 15, &[(5, 5, Player::Me), (6, 5, Player::Me)]);
        assert_eq!(evaluate(&board), 500);
    }

    #[test]
    fn test_opponent_weighted_twice() {
        let board = board_with(15, 15, &[(5, 5, Player::Opponent), (5, 6, Player::Opponent)]);
        assert_eq!(evaluate(&board), -1000);
    }

    #[test]
    fn test_edge_closes_line() {
        // Two stones against the left edge: one open end
        let board = board_with(15, 15, &[(0, 3, Player::Me), (1, 3, Player::Me)]);
        assert_eq!(evaluate(&board), 50);
    }

    #[test]
    fn test_blocked_both_ends() {
        let board = board_with(
            15,
            15,
            &[
                (4, 4, Player::Opponent),
                (5, 4, Player::Me),
                (6, 4, Player::Me),
                (7, 4, Player::Me),
                (8, 4, Player::Me),
                (9, 4, Player::Opponent),
            ],
        );
        let totals = line_totals(&board);
        assert_eq!(totals.mine, 0);
        assert_eq!(totals.theirs, 0);
    }

    #[test]
    fn test_diagonals() {
        let down_right = board_with(
            15,
            15,
            &[(2, 2, Player::Me), (3, 3, Player::Me), (4, 4, Player::Me)],
        );
        assert_eq!(evaluate(&down_right), 200_000_000);

        let down_left = board_with(
            15,
            15,
            &[(9, 2, Player::Me), (8, 3, Player::Me), (7, 4, Player::Me)],
        );
        assert_eq!(evaluate(&down_left), 200_000_000);
    }

    #[test]
    fn test_open_four_and_five() {
        let mut board = board_with(
            15,
            15,
            &[(3, 7, Player::Me), (4, 7, Player::Me), (5, 7, Player::Me), (6, 7, Player::Me)],
        );
        assert_eq!(evaluate(&board), OPEN_FOUR);

        board.place(Move::new(7, 7), Player::Me);
        assert_eq!(evaluate(&board), FIVE);
    }

    #[test]
    fn test_overline_counts_as_five() {
        let stones: Vec<(i32, i32, Player)> = (0..7).map(|y| (2, y, Player::Opponent)).collect();
        let board = board_with(15, 15, &stones);
        assert_eq!(line_totals(&board).theirs, FIVE);
    }

    #[test]
    fn test_line_from_skips_non_start() {
        let board = board_with(15, 15, &[(5, 5, Player::Me), (6, 5, Player::Me)]);
        assert!(line_from(&board, Move::new(6, 5), 1, 0).is_none());
        let line = line_from(&board, Move::new(5, 5), 1, 0).unwrap();
        assert_eq!(
            line,
            Line {
                owner: Player::Me,
                count: 2,
                open_ends: 2
            }
        );
        assert!(line_from(&board, Move::new(0, 0), 1, 0).is_none());
    }

    #[test]
    fn test_label_swap_on_symmetric_rows() {
        // Only twos and half-open threes, whose table rows are owner-symmetric
        let board = board_with(
            15,
            15,
            &[
                (1, 1, Player::Me),
                (2, 1, Player::Me),
                (8, 8, Player::Opponent),
                (8, 9, Player::Opponent),
                (0, 12, Player::Me),
                (1, 12, Player::Me),
                (2, 12, Player::Me),
            ],
        );
        let before = line_totals(&board);
        let after = line_totals(&swapped(&board));
        assert_eq!(after.mine, before.theirs);
        assert_eq!(after.theirs, before.mine);
    }

    #[test]
    fn test_label_swap_reverses_sign() {
        let board = board_with(
            15,
            15,
            &[(3, 3, Player::Me), (4, 4, Player::Me), (10, 2, Player::Opponent)],
        );
        assert!(evaluate(&board) > 0);
        assert!(evaluate(&swapped(&board)) < 0);
    }
}
