//! Pawn move generation, set-wise over the pawn bitboard.

use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

/// Push one move, fanning a promotion out into all four choices.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, is_capture: bool, promo: bool) {
    if promo {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new_promotion(from, to, is_capture, piece));
        }
    } else if is_capture {
        moves.push(Move::capture(from, to, Piece::Pawn));
    } else {
        moves.push(Move::quiet(from, to, Piece::Pawn));
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let stm = self.side_to_move;
        let pawns = self.pieces[stm.index()][Piece::Pawn.index()];
        let empty = !self.all_occupancy.0;
        let enemy = self.occupancy[stm.opponent().index()].0;

        let (promo_rank, single, double, east_caps, west_caps) = match stm {
            Color::White => {
                let single = pawns.shift_north().0 & empty;
                (
                    Bitboard::RANK_8.0,
                    single,
                    Bitboard(single & Bitboard::RANK_3.0).shift_north().0 & empty,
                    pawns.shift_north().shift_east().0 & enemy,
                    pawns.shift_north().shift_west().0 & enemy,
                )
            }
            Color::Black => {
                let single = pawns.shift_south().0 & empty;
                (
                    Bitboard::RANK_1.0,
                    single,
                    Bitboard(single & Bitboard::RANK_6.0).shift_south().0 & empty,
                    pawns.shift_south().shift_east().0 & enemy,
                    pawns.shift_south().shift_west().0 & enemy,
                )
            }
        };
        // deltas from target back to origin
        let (push_back, east_back, west_back): (isize, isize, isize) = match stm {
            Color::White => (-8, -9, -7),
            Color::Black => (8, 7, 9),
        };

        for to in Bitboard(single).iter() {
            let from = Square::from_index((to.index() as isize + push_back) as usize);
            push_pawn_move(moves, from, to, false, (1u64 << to.index()) & promo_rank != 0);
        }
        for to in Bitboard(double).iter() {
            let from = Square::from_index((to.index() as isize + 2 * push_back) as usize);
            moves.push(Move::quiet(from, to, Piece::Pawn));
        }
        for to in Bitboard(east_caps).iter() {
            let from = Square::from_index((to.index() as isize + east_back) as usize);
            push_pawn_move(moves, from, to, true, (1u64 << to.index()) & promo_rank != 0);
        }
        for to in Bitboard(west_caps).iter() {
            let from = Square::from_index((to.index() as isize + west_back) as usize);
            push_pawn_move(moves, from, to, true, (1u64 << to.index()) & promo_rank != 0);
        }

        // En passant: any own pawn attacking the target square may capture.
        if let Some(ep) = self.en_passant_square {
            let attackers = PAWN_ATTACKS[stm.opponent().index()][ep.index()] & pawns.0;
            for from in Bitboard(attackers).iter() {
                moves.push(Move::capture(from, ep, Piece::Pawn));
            }
        }
    }
}
