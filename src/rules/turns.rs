//! Move lists per color and turn composition

use crate::board::{Board, Color, Move, Pos, Turn};

use super::{capture_moves, motion_moves};

/// All moves for the piece on `pos`: captures first, then motions.
pub fn moves_for_piece(board: &Board, pos: Pos) -> Vec<Move> {
    let mut moves = capture_moves(board, pos);
    moves.extend(motion_moves(board, pos));
    moves
}

/// All moves for a color, scanning its pieces in row-major order.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let origins: Vec<Pos> = board.pieces(color).map(|(pos, _)| pos).collect();
    origins
        .into_iter()
        .flat_map(|pos| moves_for_piece(board, pos))
        .collect()
}

/// All legal turns for a color.
///
/// A single move is a turn on its own. An ordinary first move is applied
/// speculatively: if it already decides the game it becomes a one-move
/// turn, otherwise it pairs with every ordinary second move that does not
/// move the same piece again. The board is restored before returning.
pub fn all_turns(board: &mut Board, color: Color) -> Vec<Turn> {
    let mut turns = Vec::new();

    for first in all_moves(board, color) {
        if first.single {
            turns.push(Turn::single(first));
            continue;
        }

        board.apply_move(&first);
        if board.result().is_decided() {
            turns.push(Turn::single(first));
        } else {
            turns.extend(
                all_moves(board, color)
                    .into_iter()
                    .filter(|second| !second.single && second.from != first.to)
                    .map(|second| Turn::double(first, second)),
            );
        }
        board.undo_move(&first);
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn gold(board: &mut Board, row: u8, col: u8) {
        board.put(Pos::new(row, col), Piece::Fleetship(Color::Gold));
    }

    fn silver(board: &mut Board, row: u8, col: u8) {
        board.put(Pos::new(row, col), Piece::Fleetship(Color::Silver));
    }

    #[test]
    fn test_captures_listed_before_motions() {
        let mut board = Board::empty();
        gold(&mut board, 5, 5);
        silver(&mut board, 6, 6);

        let moves = moves_for_piece(&board, Pos::new(5, 5));
        assert!(moves[0].is_capture());
        assert!(moves[1..].iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_all_moves_only_own_pieces() {
        let board = Board::new();
        for color in Color::ALL {
            let moves = all_moves(&board, color);
            assert!(!moves.is_empty());
            assert!(moves.iter().all(|m| m.piece.owner() == color));
        }
    }

    #[test]
    fn test_generator_soundness_opening() {
        let board = Board::new();
        for color in Color::ALL {
            for mv in all_moves(&board, color) {
                match board.get(mv.to) {
                    None => assert!(mv.captured.is_none()),
                    Some(target) => {
                        assert_ne!(target.owner(), color);
                        assert_eq!(mv.captured, Some(target));
                    }
                }
            }
        }
    }

    #[test]
    fn test_turn_composition_rules() {
        let mut board = Board::new();
        for color in Color::ALL {
            let turns = all_turns(&mut board, color);
            assert!(!turns.is_empty());
            for turn in &turns {
                if let Some(second) = &turn.second {
                    assert!(!turn.first.single);
                    assert!(!second.single);
                    assert_ne!(second.from, turn.first.to);
                }
            }
        }
    }

    #[test]
    fn test_all_turns_restores_board() {
        let mut board = Board::new();
        let before = board.clone();
        let _ = all_turns(&mut board, Color::Gold);
        let _ = all_turns(&mut board, Color::Silver);
        assert_eq!(board, before);
    }

    #[test]
    fn test_lone_fleetship_cannot_move() {
        // A lone fleetship has no partner for its second move
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        silver(&mut board, 2, 2);

        assert!(all_turns(&mut board, Color::Silver).is_empty());
    }

    #[test]
    fn test_two_fleetships_pair_up() {
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        silver(&mut board, 0, 0);
        silver(&mut board, 10, 10);

        let turns = all_turns(&mut board, Color::Silver);
        // Each ship has 20 slides; the partner still has 20 after any first move
        // unless the first move lands in its line of travel.
        assert!(!turns.is_empty());
        assert!(turns.iter().all(|t| t.second.is_some()));
        assert!(turns
            .iter()
            .all(|t| t.second.map(|s| s.from != t.first.to).unwrap_or(false)));
    }

    #[test]
    fn test_winning_first_move_is_own_turn() {
        // Silver fleetship steps diagonally onto the flagship: a single capture
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        silver(&mut board, 4, 4);
        silver(&mut board, 0, 10);

        let turns = all_turns(&mut board, Color::Silver);
        let winning: Vec<_> = turns
            .iter()
            .filter(|t| t.first.captured == Some(Piece::Flagship))
            .collect();
        assert_eq!(winning.len(), 1);
        assert!(winning[0].is_single());
    }

    #[test]
    fn test_flagship_turns_are_single() {
        let mut board = Board::new();
        let turns = all_turns(&mut board, Color::Gold);
        assert!(turns
            .iter()
            .filter(|t| t.first.piece == Piece::Flagship)
            .all(|t| t.is_single()));
    }
}
