//! Capture moves
//!
//! Any piece captures by stepping one tile diagonally onto an opposing
//! piece. A capture always ends the turn.

use crate::board::{Board, Move, Pos};

/// Diagonal directions in generation order
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Capture moves for the piece standing on `pos`.
///
/// Returns an empty list for an empty tile.
pub fn capture_moves(board: &Board, pos: Pos) -> Vec<Move> {
    let Some(piece) = board.get(pos) else {
        return Vec::new();
    };

    DIAGONALS
        .iter()
        .filter_map(|&(dr, dc)| pos.offset(dr, dc))
        .filter_map(|target| match board.get(target) {
            Some(victim) if victim.owner() != piece.owner() => {
                Some(Move::new(pos, target, piece, Some(victim), true))
            }
            _ => None,
        })
        .collect()
}
