//! Motion moves
//!
//! Pieces slide orthogonally over empty tiles, any distance, stopping before
//! the first occupied tile or the edge. Flagship motions end the turn,
//! fleetship motions may be combined into a two-move turn.

use crate::board::{Board, Move, Pos};

/// Slide directions in generation order: up, down, right, left
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Motion moves for the piece standing on `pos`.
pub fn motion_moves(board: &Board, pos: Pos) -> Vec<Move> {
    let Some(piece) = board.get(pos) else {
        return Vec::new();
    };

    let single = piece.motion_is_single();
    let mut moves = Vec::with_capacity(20);

    for (dr, dc) in DIRECTIONS {
        let mut cursor = pos.offset(dr, dc);
        while let Some(target) = cursor {
            if !board.is_empty(target) {
                break;
            }
            moves.push(Move::new(pos, target, piece, None, single));
            cursor = target.offset(dr, dc);
        }
    }

    moves
}
