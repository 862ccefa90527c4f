//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, MAX_DIMENSION};

/// Cell owner. `None` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    None,
    Me,
    Opponent,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Me => Player::Opponent,
            Player::Opponent => Player::Me,
            Player::None => Player::None,
        }
    }
}

/// Coordinates on the board, 0-based.
///
/// Signed so that off-board probes and the `(-1, -1)` "no move" sentinel
/// can be expressed without a separate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: i32,
    pub y: i32,
}

impl Move {
    /// Sentinel reported when no legal move exists.
    pub const NONE: Move = Move { x: -1, y: -1 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `k` cells along `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, k: i32) -> Self {
        Self {
            x: self.x + dx * k,
            y: self.y + dy * k,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Move::NONE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
