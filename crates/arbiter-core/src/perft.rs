//! Perft: exhaustive legal-move tree counting, the standard cross-check
//! for move generator correctness.

use crate::chess_move::Move;
use crate::legality::VerifiedMove;
use crate::position::Position;

/// Count the leaf nodes of the legal move tree to the given depth.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| {
            let vm = VerifiedMove::classify_unchecked(pos, mv);
            perft(&pos.apply_move(&vm), depth - 1)
        })
        .sum()
}

/// Perft split by first move, for pinpointing generator disagreements.
pub fn divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    pos.legal_moves()
        .into_iter()
        .map(|mv| {
            let vm = VerifiedMove::classify_unchecked(pos, mv);
            (mv, perft(&pos.apply_move(&vm), depth - 1))
        })
        .collect()
}
