//! Targeted move generation tests: counts, castling preconditions, pins,
//! and the en-passant edge cases.

use crate::board::{Board, Move, Piece, Square};

fn uci_moves(board: &mut Board) -> Vec<String> {
    let mut moves: Vec<String> = board.generate_moves().iter().map(Move::to_string).collect();
    moves.sort();
    moves
}

#[test]
fn test_starting_position_has_twenty_moves() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 20);
    // 16 pawn moves, 4 knight moves
    assert_eq!(moves.iter().filter(|m| m.piece == Piece::Pawn).count(), 16);
    assert_eq!(
        moves.iter().filter(|m| m.piece == Piece::Knight).count(),
        4
    );
    assert!(moves.iter().all(|m| !m.is_capture));
}

#[test]
fn test_castling_moves_generated() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = uci_moves(&mut board);
    assert!(moves.contains(&"e1g1".to_string()));
    assert!(moves.contains(&"e1c1".to_string()));
    assert_eq!(board.generate_moves().len(), 26);
}

#[test]
fn test_castling_blocked_by_piece() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R2QK2R w KQkq - 0 1");
    let moves = uci_moves(&mut board);
    assert!(moves.contains(&"e1g1".to_string()));
    // d1 occupied: queen-side is off
    assert!(!moves.contains(&"e1c1".to_string()));
}

#[test]
fn test_castling_through_attacked_square_rejected() {
    // black rook on f8 covers f1, the king's transit square
    let mut board = Board::from_fen("r4r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = uci_moves(&mut board);
    assert!(!moves.contains(&"e1g1".to_string()));
    // c1-side transit squares are safe
    assert!(moves.contains(&"e1c1".to_string()));
}

#[test]
fn test_castling_while_in_check_rejected() {
    let mut board = Board::from_fen("r3k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
    assert!(board.is_in_check(crate::board::Color::White));
    let moves = uci_moves(&mut board);
    assert!(!moves.contains(&"e1g1".to_string()));
    assert!(!moves.contains(&"e1c1".to_string()));
}

#[test]
fn test_pinned_piece_cannot_move_away() {
    // the e4 knight is pinned to the king by the e8 rook
    let mut board = Board::from_fen("4r3/8/8/8/4N3/8/8/4K3 w - - 0 1");
    let mut moves = board.generate_moves();
    assert!(moves.iter().all(|m| m.piece != Piece::Knight));

    // unpinned on a different file, the knight moves freely
    let mut free = Board::from_fen("3r4/8/8/8/4N3/8/8/4K3 w - - 0 1");
    moves = free.generate_moves();
    assert!(moves.iter().any(|m| m.piece == Piece::Knight));
}

#[test]
fn test_en_passant_generated_and_captures_pawn() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    let moves = uci_moves(&mut board);
    assert!(moves.contains(&"e5d6".to_string()));

    board.make_move_uci("e5d6").unwrap();
    assert_eq!(board.piece_at(Square::new(4, 3)), None); // d5 pawn gone
    assert_eq!(board.en_passant_square(), None);
}

#[test]
fn test_en_passant_horizontal_pin_rejected() {
    // Ka5, Pb5, black pawn just double-pushed to c5, Rh5: taking en passant
    // would clear the rank and expose the king to the rook.
    let mut board = Board::from_fen("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 2");
    let moves = uci_moves(&mut board);
    assert!(!moves.contains(&"b5c6".to_string()));
    // the plain push remains available
    assert!(moves.contains(&"b5b6".to_string()));
}

#[test]
fn test_promotions_fan_out() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = uci_moves(&mut board);
    for promo in ["a7a8q", "a7a8r", "a7a8b", "a7a8n"] {
        assert!(moves.contains(&promo.to_string()), "missing {promo}");
    }
}

#[test]
fn test_capture_promotions() {
    let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let moves = uci_moves(&mut board);
    assert!(moves.contains(&"a7b8q".to_string()));
    assert!(moves.contains(&"a7a8n".to_string()));
    let list = board.generate_moves();
    let capture_promos = list
        .iter()
        .filter(|m| m.is_capture && m.promotion.is_some())
        .count();
    assert_eq!(capture_promos, 4);
}

#[test]
fn test_check_evasion_only() {
    // white king e1 checked by rook e8; every legal move must resolve it
    let mut board = Board::from_fen("4r1k1/8/8/8/8/8/3P4/4K3 w - - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(mv.piece == Piece::King, "only king moves evade: {mv}");
    }
}

#[test]
fn test_generate_captures_subset() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    let captures = board.generate_captures();
    assert!(captures.iter().all(|m| m.is_capture));

    let all = board.generate_moves();
    for capture in &captures {
        assert!(all.iter().any(|m| m == capture));
    }
    assert_eq!(
        all.iter().filter(|m| m.is_capture).count(),
        captures.len()
    );
}

#[test]
fn test_italian_position_move_count() {
    let mut board =
        Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    assert_eq!(board.generate_moves().len(), 30);
}
