use super::*;
use crate::error::BoardError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Me.opponent(), Player::Opponent);
    assert_eq!(Player::Opponent.opponent(), Player::Me);
    assert_eq!(Player::None.opponent(), Player::None);
}

#[test]
fn test_move_display() {
    assert_eq!(Move::new(3, 7).to_string(), "3,7");
    assert_eq!(Move::NONE.to_string(), "-1,-1");
    assert!(Move::NONE.is_none());
}

#[test]
fn test_board_new_rejects_bad_dimensions() {
    assert_eq!(
        Board::new(0, 15),
        Err(BoardError::InvalidDimensions { width: 0, height: 15 })
    );
    assert!(Board::new(15, -1).is_err());
    assert!(Board::new(1, 1).is_ok());
}

#[test]
fn test_board_new_rejects_oversized() {
    assert_eq!(
        Board::new(2_000_000_000, 2_000_000_000),
        Err(BoardError::TooLarge {
            width: 2_000_000_000,
            height: 2_000_000_000
        })
    );
    assert!(Board::new(MAX_DIMENSION + 1, 10).is_err());
    assert!(Board::new(10, MAX_DIMENSION + 1).is_err());

    let board = Board::new(MAX_DIMENSION, MAX_DIMENSION).unwrap();
    assert_eq!(board.cells().count(), (MAX_DIMENSION * MAX_DIMENSION) as usize);
}

#[test]
fn test_board_center() {
    assert_eq!(Board::new(15, 15).unwrap().center(), Move::new(7, 7));
    assert_eq!(Board::new(20, 10).unwrap().center(), Move::new(10, 5));
}

#[test]
fn test_bounds_and_validity() {
    let mut board = Board::new(10, 5).unwrap();
    assert!(board.is_on_board(Move::new(9, 4)));
    assert!(!board.is_on_board(Move::new(10, 0)));
    assert!(!board.is_on_board(Move::new(0, 5)));
    assert!(!board.is_on_board(Move::new(-1, 0)));

    assert!(board.place(Move::new(2, 3), Player::Me));
    assert!(!board.is_valid(Move::new(2, 3)));
    assert!(board.is_valid(Move::new(3, 2)));
    assert_eq!(board.get(Move::new(2, 3)), Some(Player::Me));
    assert_eq!(board.get(Move::new(3, 2)), Some(Player::None));
    assert_eq!(board.get(Move::new(-1, 2)), None);
}

#[test]
fn test_place_ignores_invalid() {
    let mut board = Board::new(5, 5).unwrap();
    assert!(board.place(Move::new(1, 1), Player::Opponent));
    assert!(!board.place(Move::new(1, 1), Player::Me));
    assert_eq!(board.get(Move::new(1, 1)), Some(Player::Opponent));
    assert!(!board.place(Move::new(5, 0), Player::Me));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_none_clears() {
    let mut board = Board::new(5, 5).unwrap();
    board.place(Move::new(4, 4), Player::Me);
    assert!(board.place(Move::new(4, 4), Player::None));
    assert!(board.is_board_empty());

    board.place(Move::new(0, 0), Player::Opponent);
    board.remove(Move::new(0, 0));
    assert!(board.is_board_empty());
}

#[test]
fn test_row_major_iteration() {
    let mut board = Board::new(3, 2).unwrap();
    let order: Vec<Move> = board.cells().map(|(mv, _)| mv).collect();
    assert_eq!(
        order,
        vec![
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(2, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(2, 1),
        ]
    );

    board.place(Move::new(0, 0), Player::Me);
    board.place(Move::new(1, 0), Player::Me);
    assert_eq!(board.first_empty(), Some(Move::new(2, 0)));
}

#[test]
fn test_full_board() {
    let mut board = Board::new(2, 2).unwrap();
    for (mv, _) in board.clone().cells() {
        board.place(mv, Player::Opponent);
    }
    assert!(board.is_full());
    assert_eq!(board.first_empty(), None);

    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board.width(), 2);
}

#[test]
fn test_display() {
    let mut board = Board::new(3, 2).unwrap();
    board.place(Move::new(0, 0), Player::Me);
    board.place(Move::new(2, 1), Player::Opponent);
    assert_eq!(board.to_string(), "X..\n..O\n");
}
