//! Uniformly random player

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Color};
use crate::rules::all_turns;

use super::{Decision, Player};

/// Picks uniformly among all legal turns, passing when there is none.
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible player for tests and tools
    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn next_turn(&mut self, board: &Board) -> Decision {
        let mut work_board = board.clone();
        let turns = all_turns(&mut work_board, self.color);
        Decision::plain(turns.as_slice().choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos};

    #[test]
    fn test_random_turn_is_legal() {
        let mut board = Board::new();
        let mut player = RandomPlayer::with_seed(Color::Gold, 7);

        let turn = player.next_turn(&board).turn.unwrap();
        assert!(all_turns(&mut board, Color::Gold).contains(&turn));
    }

    #[test]
    fn test_same_seed_same_turn() {
        let board = Board::new();
        let mut a = RandomPlayer::with_seed(Color::Silver, 42);
        let mut b = RandomPlayer::with_seed(Color::Silver, 42);
        assert_eq!(a.next_turn(&board).turn, b.next_turn(&board).turn);
    }

    #[test]
    fn test_random_passes_without_turns() {
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        board.put(Pos::new(0, 10), Piece::Fleetship(Color::Silver));

        let mut player = RandomPlayer::with_seed(Color::Silver, 1);
        let decision = player.next_turn(&board);
        assert!(decision.turn.is_none());
        assert!(decision.report.is_none());
    }
}
