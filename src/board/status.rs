//! Game termination: checkmate, stalemate, and the draw rules.

use super::{Bitboard, Board, Color, Piece};
use crate::repetition::RepetitionTable;

/// Outcome of a game, with explicit draw reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    WhiteWin,
    BlackWin,
    DrawStalemate,
    DrawRepetition,
    DrawFiftyMove,
    DrawInsufficientMaterial,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Checkmate,
    Stalemate,
    Repetition,
    FiftyMove,
    InsufficientMaterial,
}

/// Classification of the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameStatus {
    pub is_game_over: bool,
    pub result: GameResult,
    pub reason: Option<GameOverReason>,
}

impl GameStatus {
    const ONGOING: GameStatus = GameStatus {
        is_game_over: false,
        result: GameResult::Ongoing,
        reason: None,
    };

    fn over(result: GameResult, reason: GameOverReason) -> Self {
        GameStatus {
            is_game_over: true,
            result,
            reason: Some(reason),
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.reason == Some(GameOverReason::Checkmate)
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.reason == Some(GameOverReason::Stalemate)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_game_over && !self.is_checkmate()
    }
}

/// Classify the position.
///
/// A `RepetitionTable` covering the game history enables threefold
/// detection; without one, repetition is not reported. Priority order:
/// no legal moves (mate or stalemate), then repetition, fifty-move rule,
/// and insufficient material.
pub fn get_game_status(board: &mut Board, repetitions: Option<&RepetitionTable>) -> GameStatus {
    let moves = board.generate_moves();

    if moves.is_empty() {
        return if board.is_in_check(board.side_to_move()) {
            let result = match board.side_to_move() {
                Color::White => GameResult::BlackWin,
                Color::Black => GameResult::WhiteWin,
            };
            GameStatus::over(result, GameOverReason::Checkmate)
        } else {
            GameStatus::over(GameResult::DrawStalemate, GameOverReason::Stalemate)
        };
    }

    if let Some(table) = repetitions {
        if table.is_threefold(board.zobrist_key()) {
            return GameStatus::over(GameResult::DrawRepetition, GameOverReason::Repetition);
        }
    }

    if board.is_fifty_move_rule() {
        return GameStatus::over(GameResult::DrawFiftyMove, GameOverReason::FiftyMove);
    }

    if board.is_insufficient_material() {
        return GameStatus::over(
            GameResult::DrawInsufficientMaterial,
            GameOverReason::InsufficientMaterial,
        );
    }

    GameStatus::ONGOING
}

impl Board {
    /// Fifty-move rule: one hundred plies without a pawn move or capture.
    #[must_use]
    pub fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly deliver mate: K vs K, K vs K+minor,
    /// same-complex KB vs KB, or KN vs KN. Any pawn, rook, or queen on the
    /// board denies.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let white = Color::White.index();
        let black = Color::Black.index();

        for piece in [Piece::Pawn, Piece::Rook, Piece::Queen] {
            if !self.pieces[white][piece.index()].is_empty()
                || !self.pieces[black][piece.index()].is_empty()
            {
                return false;
            }
        }

        let wn = self.pieces[white][Piece::Knight.index()].popcount();
        let wb = self.pieces[white][Piece::Bishop.index()].popcount();
        let bn = self.pieces[black][Piece::Knight.index()].popcount();
        let bb = self.pieces[black][Piece::Bishop.index()].popcount();
        let white_minors = wn + wb;
        let black_minors = bn + bb;

        match (white_minors, black_minors) {
            // K vs K, or a lone minor against a bare king
            (0, 0) | (1, 0) | (0, 1) => true,
            (1, 1) => {
                if wb == 1 && bb == 1 {
                    // bishops confined to one color complex cannot mate
                    let bishops = self.pieces[white][Piece::Bishop.index()].0
                        | self.pieces[black][Piece::Bishop.index()].0;
                    bishops & Bitboard::LIGHT_SQUARES.0 == 0
                        || bishops & Bitboard::DARK_SQUARES.0 == 0
                } else {
                    wn == 1 && bn == 1
                }
            }
            _ => false,
        }
    }

    /// The side to move has no legal moves and is in check.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move()) && self.generate_moves().is_empty()
    }

    /// The side to move has no legal moves and is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move()) && self.generate_moves().is_empty()
    }
}
