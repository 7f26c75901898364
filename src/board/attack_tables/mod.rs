//! Attack tables for move generation and attack queries.
//!
//! Leaper attacks (knight, king, pawn) come from small precomputed tables;
//! sliding attacks go through the magic-bitboard lookup in `magic`. The
//! magic module is a leaf: this module only re-exports its lookup
//! functions, so no cyclic dependency exists between the table layers.

mod magic;
mod tables;

pub(crate) use magic::{bishop_attacks, queen_attacks, rook_attacks};
pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
