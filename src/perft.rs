//! Perft: exhaustive legal-move tree enumeration, the ground truth for
//! move generator correctness.

use crate::board::Board;

/// Count leaf nodes of the legal move tree to `depth`.
#[must_use]
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        board.make_move(*mv);
        nodes += perft(board, depth - 1);
        board.unmake_move();
    }
    nodes
}

/// Per-root-move subtree counts, sorted by UCI string for reproducible
/// diffing against other engines, plus the total.
#[must_use]
pub fn perft_divide(board: &mut Board, depth: u32) -> (Vec<(String, u64)>, u64) {
    assert!(depth >= 1, "perft_divide requires depth >= 1");

    let mut results = Vec::new();
    let mut total = 0;
    for mv in &board.generate_moves() {
        board.make_move(*mv);
        let count = perft(board, depth - 1);
        board.unmake_move();
        results.push((mv.to_string(), count));
        total += count;
    }

    results.sort();
    log::debug!("perft_divide depth {}: {} total", depth, total);
    (results, total)
}
