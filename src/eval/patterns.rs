//! Line scores for Gomoku evaluation
//!
//! A line is a maximal run of same-owner stones in one direction. Its value
//! depends on the run length, how many of its two ends are empty, and who
//! owns it. The table below is the whole scoring model.

use crate::board::Player;

/// Score of a single line, split by owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScore {
    /// Value when the line belongs to `Me`
    pub mine: i64,
    /// Value when the line belongs to `Opponent`
    pub theirs: i64,
}

const fn row(mine: i64, theirs: i64) -> LineScore {
    LineScore { mine, theirs }
}

const ZERO: LineScore = row(0, 0);

/// Five or longer, regardless of open ends
pub const FIVE: i64 = 1_000_000_000;
pub const OPEN_FOUR: i64 = 500_000_000;

/// `LINE_SCORES[count][open_ends]`, with `count` clamped to 5.
pub const LINE_SCORES: [[LineScore; 3]; 6] = [
    // count 0
    [ZERO, ZERO, ZERO],
    // count 1
    [ZERO, ZERO, ZERO],
    // count 2
    [ZERO, row(50, 50), row(500, 500)],
    // count 3
    [ZERO, row(10_000, 10_000), row(200_000_000, 80_000_000)],
    // count 4
    [ZERO, row(150_000_000, 100_000_000), row(OPEN_FOUR, OPEN_FOUR)],
    // count >= 5
    [row(FIVE, FIVE), row(FIVE, FIVE), row(FIVE, FIVE)],
];

/// Opponent totals count this many times against `Me`.
pub const DEFENSE_MULTIPLIER: i64 = 2;

/// Look up the value of one line for its owner.
///
/// # Arguments
/// * `count` - Run length
/// * `open_ends` - Empty cells bordering the run (0..=2)
/// * `owner` - Who owns the run; `Player::None` scores nothing
#[inline]
pub fn line_score(count: usize, open_ends: usize, owner: Player) -> i64 {
    let entry = LINE_SCORES[count.min(5)][open_ends.min(2)];
    match owner {
        Player::Me => entry.mine,
        Player::Opponent => entry.theirs,
        Player::None => 0,
    }
}
