//! King move generation and the castling generator.

use super::super::attack_tables::KING_ATTACKS;
use super::super::{
    Bitboard, Board, Color, Move, MoveList, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// One castling variant: the rights bit, the king path, and the squares that
/// must be empty (queen-side additionally requires the b-file square clear).
struct CastleLane {
    right: u8,
    king_from: usize,
    king_to: usize,
    empty_mask: u64,
    checked_squares: [usize; 3],
}

const LANES: [CastleLane; 4] = [
    CastleLane {
        right: CASTLE_WHITE_K,
        king_from: 4,
        king_to: 6,
        empty_mask: (1 << 5) | (1 << 6),
        checked_squares: [4, 5, 6],
    },
    CastleLane {
        right: CASTLE_WHITE_Q,
        king_from: 4,
        king_to: 2,
        empty_mask: (1 << 1) | (1 << 2) | (1 << 3),
        checked_squares: [4, 3, 2],
    },
    CastleLane {
        right: CASTLE_BLACK_K,
        king_from: 60,
        king_to: 62,
        empty_mask: (1 << 61) | (1 << 62),
        checked_squares: [60, 61, 62],
    },
    CastleLane {
        right: CASTLE_BLACK_Q,
        king_from: 60,
        king_to: 58,
        empty_mask: (1 << 57) | (1 << 58) | (1 << 59),
        checked_squares: [60, 59, 58],
    },
];

impl Board {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList) {
        let stm = self.side_to_move;
        let own = self.occupancy[stm.index()].0;
        let enemy = self.occupancy[stm.opponent().index()].0;

        for from in self.pieces[stm.index()][Piece::King.index()].iter() {
            let targets = KING_ATTACKS[from.index()] & !own;
            for to in Bitboard(targets & enemy).iter() {
                moves.push(Move::capture(from, to, Piece::King));
            }
            for to in Bitboard(targets & !enemy).iter() {
                moves.push(Move::quiet(from, to, Piece::King));
            }
        }
    }

    /// Emit castling moves whose preconditions hold: the right is still set,
    /// the squares between king and rook are empty, and the king's start,
    /// transit, and end squares are unattacked. The rook half of the move is
    /// performed by `make_move`.
    pub(crate) fn generate_castling_moves(&self, moves: &mut MoveList) {
        let stm = self.side_to_move;
        let enemy = stm.opponent();
        let own_lanes = match stm {
            Color::White => &LANES[0..2],
            Color::Black => &LANES[2..4],
        };

        for lane in own_lanes {
            if !self.has_castling_right(lane.right) {
                continue;
            }
            if self.all_occupancy.0 & lane.empty_mask != 0 {
                continue;
            }
            if lane
                .checked_squares
                .iter()
                .any(|&sq| self.is_square_attacked(Square::from_index(sq), enemy))
            {
                continue;
            }
            moves.push(Move::quiet(
                Square::from_index(lane.king_from),
                Square::from_index(lane.king_to),
                Piece::King,
            ));
        }
    }
}
