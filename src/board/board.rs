//! Board structure: a width x height grid of cell owners

use super::{Move, Player};
use crate::error::BoardError;

/// Game board.
///
/// Cells are stored row-major (`y * width + x`). Every cell is `None`, `Me`
/// or `Opponent`; committed cells only go `None -> Me/Opponent`, while the
/// search may set a cell and clear it again before returning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Player>,
}

/// Largest accepted width or height.
pub const MAX_DIMENSION: i32 = 100;

impl Board {
    /// Allocate an empty board.
    ///
    /// Both dimensions must be positive and at most [`MAX_DIMENSION`].
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let too_large = BoardError::TooLarge { width, height };
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(too_large);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Player::None);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Board center, `(width / 2, height / 2)`
    #[inline]
    pub fn center(&self) -> Move {
        Move::new(self.width / 2, self.height / 2)
    }

    #[inline]
    fn index(&self, mv: Move) -> usize {
        debug_assert!(self.is_on_board(mv));
        mv.y as usize * self.width as usize + mv.x as usize
    }

    /// Bounds check only
    #[inline]
    pub fn is_on_board(&self, mv: Move) -> bool {
        mv.x >= 0 && mv.x < self.width && mv.y >= 0 && mv.y < self.height
    }

    /// On the board and empty
    #[inline]
    pub fn is_valid(&self, mv: Move) -> bool {
        self.is_on_board(mv) && self.cells[self.index(mv)] == Player::None
    }

    /// Owner of a cell, or `None` (the Option) when off the board.
    #[inline]
    pub fn get(&self, mv: Move) -> Option<Player> {
        if self.is_on_board(mv) {
            Some(self.cells[self.index(mv)])
        } else {
            None
        }
    }

    /// Set a cell.
    ///
    /// Placing a stone requires `is_valid(mv)`; otherwise the call is ignored
    /// and `false` is returned. Placing `Player::None` clears any on-board
    /// cell, which is how the search undoes a speculative stone.
    pub fn place(&mut self, mv: Move, player: Player) -> bool {
        let allowed = match player {
            Player::None => self.is_on_board(mv),
            _ => self.is_valid(mv),
        };
        if allowed {
            let idx = self.index(mv);
            self.cells[idx] = player;
        }
        allowed
    }

    /// Clear a cell (undo of a speculative `place`)
    #[inline]
    pub fn remove(&mut self, mv: Move) {
        self.place(mv, Player::None);
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Player)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &p)| (Move::new(i as i32 % width, i as i32 / width), p))
    }

    /// Iterate occupied cells in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Move, Player)> + '_ {
        self.cells().filter(|&(_, p)| p != Player::None)
    }

    /// First empty cell in row-major order.
    pub fn first_empty(&self) -> Option<Move> {
        self.cells()
            .find(|&(_, p)| p == Player::None)
            .map(|(mv, _)| mv)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&p| p != Player::None).count()
    }

    /// No stone placed yet
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&p| p == Player::None)
    }

    /// Every cell occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&p| p != Player::None)
    }

    /// Empty every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Player::None);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match self.cells[self.index(Move::new(x, y))] {
                    Player::Me => 'X',
                    Player::Opponent => 'O',
                    Player::None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
