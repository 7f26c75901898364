//! Knight move generation.

use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let stm = self.side_to_move;
        let own = self.occupancy[stm.index()].0;
        let enemy = self.occupancy[stm.opponent().index()].0;

        for from in self.pieces[stm.index()][Piece::Knight.index()].iter() {
            let targets = KNIGHT_ATTACKS[from.index()] & !own;
            for to in Bitboard(targets & enemy).iter() {
                moves.push(Move::capture(from, to, Piece::Knight));
            }
            for to in Bitboard(targets & !enemy).iter() {
                moves.push(Move::quiet(from, to, Piece::Knight));
            }
        }
    }
}
