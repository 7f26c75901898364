//! Bishop, rook, and queen move generation via magic lookups.

use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Move, MoveList, Piece};

impl Board {
    pub(crate) fn generate_slider_moves(&self, piece: Piece, moves: &mut MoveList) {
        let stm = self.side_to_move;
        let own = self.occupancy[stm.index()].0;
        let enemy = self.occupancy[stm.opponent().index()].0;
        let occ = self.all_occupancy.0;

        for from in self.pieces[stm.index()][piece.index()].iter() {
            let attacks = match piece {
                Piece::Bishop => bishop_attacks(from.index(), occ),
                Piece::Rook => rook_attacks(from.index(), occ),
                Piece::Queen => queen_attacks(from.index(), occ),
                _ => unreachable!("generate_slider_moves on a non-slider"),
            };
            let targets = attacks & !own;
            for to in Bitboard(targets & enemy).iter() {
                moves.push(Move::capture(from, to, piece));
            }
            for to in Bitboard(targets & !enemy).iter() {
                moves.push(Move::quiet(from, to, piece));
            }
        }
    }
}
