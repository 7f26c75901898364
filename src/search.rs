//! Iterative-deepening negamax with alpha-beta pruning, quiescence, and
//! transposition-table caching.
//!
//! Scores are centipawns from the perspective of the side to move at the
//! node, so one routine serves both colors. The root returns the score from
//! the side to move at the root.

use std::time::{Duration, Instant};

use crate::board::{Board, Color, Move, MoveList, Piece};
use crate::repetition::RepetitionTable;
use crate::tt::{BoundType, TranspositionTable};

/// Mate found at the root scores this; mates further down the tree score
/// progressively less, so the search prefers the shortest mate.
pub const MATE_SCORE: i32 = 1_000_000;
pub const CHECKMATE_PLY_ADJUST: i32 = 1_000;

const SCORE_INFINITE: i32 = MATE_SCORE + 1;

/// Quiescence recursion bound; promotion-capture chains can regenerate
/// material, so depletion alone is not a termination proof.
const QSEARCH_PLY_CAP: u16 = 32;

/// Material-only evaluation in centipawns, positive for White.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            let count = board.piece_count(color, piece) as i32;
            score += sign * piece.value() * count;
        }
    }
    score
}

/// Evaluation from the side to move's perspective.
fn evaluate_stm(board: &Board) -> i32 {
    match board.side_to_move() {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}

/// Search the position to `max_depth` plies with iterative deepening.
///
/// Returns the best move and its score from the side to move's perspective,
/// or `(None, 0)` when there is no legal move; callers distinguish mate from
/// stalemate via `get_game_status`. The wall clock is checked between
/// depths only, so the move from the last fully completed depth is returned.
pub fn search_root(
    board: &mut Board,
    max_depth: u16,
    time_limit: Option<Duration>,
    tt: &mut TranspositionTable,
) -> (Option<Move>, i32) {
    let root_moves = board.generate_moves();
    if root_moves.is_empty() {
        return (None, 0);
    }

    let mut repetitions = RepetitionTable::new();
    repetitions.push(board.zobrist_key());
    tt.new_search();

    let start = Instant::now();
    let mut best_move = None;
    let mut best_score = 0;

    for depth in 1..=max_depth {
        if let Some(limit) = time_limit {
            if start.elapsed() >= limit {
                break;
            }
        }

        let mut moves = root_moves.clone();
        try_tt_move_first(&mut moves, board.zobrist_key(), tt);

        let mut alpha = -SCORE_INFINITE;
        let mut iteration_best = None;
        for mv in &moves {
            board.make_move(*mv);
            repetitions.push(board.zobrist_key());
            let score = -negamax(
                board,
                depth - 1,
                -SCORE_INFINITE,
                -alpha,
                1,
                tt,
                &mut repetitions,
            );
            repetitions.pop();
            board.unmake_move();

            if score > alpha {
                alpha = score;
                iteration_best = Some(*mv);
            }
        }

        best_move = iteration_best;
        best_score = alpha;
        tt.store(
            board.zobrist_key(),
            depth,
            BoundType::Exact,
            alpha,
            iteration_best,
        );
        log::debug!(
            "depth {} best {} score {} ({} ms)",
            depth,
            iteration_best.map_or_else(|| "-".to_string(), |m| m.to_string()),
            alpha,
            start.elapsed().as_millis()
        );
    }

    (best_move, best_score)
}

fn negamax(
    board: &mut Board,
    depth: u16,
    mut alpha: i32,
    beta: i32,
    ply: u16,
    tt: &mut TranspositionTable,
    repetitions: &mut RepetitionTable,
) -> i32 {
    if board.is_fifty_move_rule()
        || board.is_insufficient_material()
        || repetitions.is_threefold(board.zobrist_key())
    {
        return 0;
    }

    let key = board.zobrist_key();
    if let Some(entry) = tt.probe(key) {
        if entry.depth >= depth {
            match entry.bound {
                BoundType::Exact => return entry.value,
                BoundType::LowerBound if entry.value >= beta => return entry.value,
                BoundType::UpperBound if entry.value <= alpha => return entry.value,
                _ => {}
            }
        }
    }

    if depth == 0 {
        return quiescence(board, alpha, beta, 0);
    }

    let mut moves = board.generate_moves();
    if moves.is_empty() {
        return if board.is_in_check(board.side_to_move()) {
            -MATE_SCORE + i32::from(ply) * CHECKMATE_PLY_ADJUST
        } else {
            0
        };
    }
    try_tt_move_first(&mut moves, key, tt);

    let orig_alpha = alpha;
    let mut best_value = -SCORE_INFINITE;
    let mut best_move = None;

    for mv in &moves {
        board.make_move(*mv);
        repetitions.push(board.zobrist_key());
        let score = -negamax(board, depth - 1, -beta, -alpha, ply + 1, tt, repetitions);
        repetitions.pop();
        board.unmake_move();

        if score > best_value {
            best_value = score;
            best_move = Some(*mv);
        }
        if best_value > alpha {
            alpha = best_value;
        }
        if alpha >= beta {
            break;
        }
    }

    let bound = if best_value <= orig_alpha {
        BoundType::UpperBound
    } else if best_value >= beta {
        BoundType::LowerBound
    } else {
        BoundType::Exact
    };
    tt.store(key, depth, bound, best_value, best_move);

    best_value
}

/// Captures-only extension of the search past the nominal horizon.
fn quiescence(board: &mut Board, mut alpha: i32, beta: i32, qply: u16) -> i32 {
    let stand_pat = evaluate_stm(board);
    if qply >= QSEARCH_PLY_CAP {
        return stand_pat;
    }
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    for mv in &board.generate_captures() {
        board.make_move(*mv);
        let score = -quiescence(board, -beta, -alpha, qply + 1);
        board.unmake_move();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Move the cached best move for `key` to the front of the list.
fn try_tt_move_first(moves: &mut MoveList, key: u64, tt: &TranspositionTable) {
    let Some(tt_move) = tt.probe(key).and_then(|entry| entry.best_move) else {
        return;
    };
    let slice = moves.as_mut_slice();
    if let Some(pos) = slice.iter().position(|mv| *mv == tt_move) {
        slice.swap(0, pos);
    }
}
