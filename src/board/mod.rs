//! Chess board representation and game logic.
//!
//! Bitboards with a mailbox dual for point lookups, incremental Zobrist
//! hashing, make/unmake with full state restoration, and legal move
//! generation supporting castling, en passant and promotions.
//!
//! # Example
//! ```
//! use luft::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, UndoRecord};
pub use status::{get_game_status, GameOverReason, GameResult, GameStatus};
pub use types::{Bitboard, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::{
    castle_bit, file_to_index, rank_to_index, ALL_CASTLING_RIGHTS, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, PROMOTION_PIECES,
};
