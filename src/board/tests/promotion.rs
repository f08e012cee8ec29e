//! Promotion tests.

use super::{find_move, sq};
use crate::board::{Color, MoveKind, Piece, Position};

const PUSH: &str = "8/P7/8/8/8/8/8/K1k5 w - - 0 1";

#[test]
fn test_promotion_offers_four_pieces() {
    let mut board = Position::from_fen(PUSH);
    let mut promotions: Vec<Piece> = board
        .legal_moves()
        .iter()
        .filter(|mv| mv.from() == sq("a7"))
        .filter_map(|mv| mv.promotion())
        .collect();
    promotions.sort_by_key(|piece| piece.value());
    assert_eq!(
        promotions,
        vec![Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
    );
}

#[test]
fn test_promotion_successors() {
    let board = Position::from_fen(PUSH);
    let promoted: Vec<Piece> = board
        .successors()
        .iter()
        .filter_map(|child| child.piece_at(sq("a8")))
        .map(|(_, piece)| piece)
        .collect();
    assert_eq!(promoted.len(), 4);
    assert!(promoted.contains(&Piece::Knight));
    assert!(board.piece_at(sq("a7")).is_some());
}

#[test]
fn test_promotion_updates_material() {
    let mut board = Position::from_fen(PUSH);
    let before = board.material(Color::White);

    let mv = find_move(&mut board, "a7", "a8", Some(Piece::Queen));
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    assert!(board.is_empty(sq("a7")));
    assert_eq!(board.material(Color::White), before - 100 + 900);

    board.unmake_move(mv, info);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.material(Color::White), before);
}

#[test]
fn test_capture_promotion_records_victim() {
    let mut board = Position::from_fen("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let black_before = board.material(Color::Black);

    let mv = find_move(&mut board, "a7", "b8", Some(Piece::Knight));
    assert_eq!(
        mv.kind(),
        MoveKind::Promotion {
            piece: Piece::Knight,
            captured: Some(Piece::Rook),
        }
    );

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("b8")), Some((Color::White, Piece::Knight)));
    assert_eq!(board.material(Color::Black), black_before - 500);

    board.unmake_move(mv, info);
    assert_eq!(board.piece_at(sq("b8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(board.material(Color::Black), black_before);
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut board = Position::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1");
    let mv = board.play_move("g2g1r").unwrap();
    assert_eq!(mv.promotion(), Some(Piece::Rook));
    assert_eq!(board.piece_at(sq("g1")), Some((Color::Black, Piece::Rook)));
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_promotion_requires_piece_letter() {
    let mut board = Position::from_fen(PUSH);
    assert!(board.parse_move("a7a8").is_err());
    assert!(board.parse_move("a7a8k").is_err());
    assert!(board.parse_move("a7a8n").is_ok());
}
