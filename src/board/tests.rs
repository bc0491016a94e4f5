use super::*;
use crate::error::EngineError;

#[test]
fn test_disc_opponent() {
    assert_eq!(Disc::Black.opponent(), Disc::White);
    assert_eq!(Disc::White.opponent(), Disc::Black);
    assert_eq!(Disc::Empty.opponent(), Disc::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(8), 28);

    let pos2 = Pos::from_index(28, 8);
    assert_eq!(pos2, pos);

    // Same index means a different cell on a different board size
    assert_eq!(Pos::from_index(28, 6), Pos::new(4, 4));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 6));
    assert!(Pos::is_valid(5, 5, 6));
    assert!(!Pos::is_valid(6, 0, 6));
    assert!(!Pos::is_valid(-1, 0, 6));
    assert!(Pos::is_valid(11, 11, 12));
    assert!(!Pos::is_valid(0, 12, 12));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1, 8), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0, 8), None);
    assert_eq!(Pos::new(7, 7).offset(0, 1, 8), None);
}

#[test]
fn test_corners() {
    let c = corners(10);
    assert_eq!(c[0], Pos::new(0, 0));
    assert_eq!(c[3], Pos::new(9, 9));
    assert!(Pos::new(0, 9).is_corner(10));
    assert!(!Pos::new(0, 8).is_corner(10));
    assert!(!Pos::new(1, 1).is_corner(10));
}

#[test]
fn test_unsupported_size() {
    assert_eq!(Board::new(7), Err(EngineError::UnsupportedBoardSize(7)));
    assert!(Board::new(4).is_err());
    for size in SUPPORTED_SIZES {
        assert!(Board::new(size).is_ok());
    }
}

#[test]
fn test_initial_position() {
    for size in SUPPORTED_SIZES {
        let board = Board::initial(size).unwrap();
        assert_eq!(board.count(Disc::Black), 2);
        assert_eq!(board.count(Disc::White), 2);
        assert_eq!(board.disc_count(), 4);
        assert_eq!(board.empty_count(), size * size - 4);
    }

    let board = Board::initial(8).unwrap();
    assert_eq!(board.get(Pos::new(3, 3)), Disc::White);
    assert_eq!(board.get(Pos::new(4, 4)), Disc::White);
    assert_eq!(board.get(Pos::new(3, 4)), Disc::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Disc::Black);
}

#[test]
fn test_from_rows_and_display() {
    let rows = [
        "B . . . . W",
        ". . . . . .",
        ". . W B . .",
        ". . B W . .",
        ". . . . . .",
        "X . . . . O",
    ];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.size(), 6);
    assert_eq!(board.get(Pos::new(0, 0)), Disc::Black);
    assert_eq!(board.get(Pos::new(5, 5)), Disc::White);
    assert_eq!(board.count(Disc::Black), 4);
    assert_eq!(board.count(Disc::White), 4);

    let text = board.to_string();
    assert_eq!(text.lines().next(), Some("B....W"));
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_from_rows_rejects_ragged() {
    let rows = ["......", ".....", "......", "......", "......", "......"];
    match Board::from_rows(&rows) {
        Err(EngineError::MalformedBoard { row, .. }) => assert_eq!(row, 1),
        other => panic!("expected malformed board, got {:?}", other),
    }

    let rows = ["......", "..?...", "......", "......", "......", "......"];
    assert!(Board::from_rows(&rows).is_err());
}

#[test]
fn test_clone_is_independent() {
    let board = Board::initial(6).unwrap();
    let mut copy = board.clone();
    copy.place(Pos::new(0, 0), Disc::Black);
    assert!(board.is_empty(Pos::new(0, 0)));
    assert!(!copy.is_empty(Pos::new(0, 0)));
    assert!(!board.is_full());
}
