//! Zobrist hashing for chess positions.
//!
//! Provides the key tables for incrementally-updatable 64-bit position
//! hashes. Keys are generated deterministically from a fixed seed, so hashes
//! are stable across runs and processes.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece};

/// Seed for deterministic key generation.
const ZOBRIST_SEED: u64 = 0xC0FFEE;

pub(crate) struct ZobristKeys {
    /// One key per (piece, square); piece index = color * 6 + piece type.
    pub(crate) piece_square: [[u64; 64]; 12],
    /// One key per castling-rights bitmask value (0..16).
    pub(crate) castling: [u64; 16],
    /// One key per en-passant target square.
    pub(crate) en_passant: [u64; 64],
    /// Toggled when Black is to move.
    pub(crate) side_to_move: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_square = [[0u64; 64]; 12];
        let mut castling = [0u64; 16];
        let mut en_passant = [0u64; 64];

        for piece in &mut piece_square {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }
        for key in &mut castling {
            *key = rng.gen();
        }
        for key in &mut en_passant {
            *key = rng.gen();
        }
        let side_to_move = rng.gen();

        ZobristKeys {
            piece_square,
            castling,
            en_passant,
            side_to_move,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Index into `piece_square`: white pieces occupy 0..6, black 6..12.
#[inline]
pub(crate) fn piece_index(color: Color, piece: Piece) -> usize {
    color.index() * 6 + piece.index()
}
