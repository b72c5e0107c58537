//! Players that produce turns for the game driver
//!
//! The AI engine ([`crate::AIEngine`]), the random player and the human
//! player all implement [`Player`].

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::board::{Board, Color, Turn};
use crate::engine::MoveResult;

/// One player's answer to "your turn".
#[derive(Debug, Clone, Default)]
pub struct Decision {
    /// Turn to play, `None` to pass
    pub turn: Option<Turn>,
    /// Search report, present for AI players
    pub report: Option<MoveResult>,
}

impl Decision {
    /// A decision without a search report
    #[inline]
    pub fn plain(turn: Option<Turn>) -> Self {
        Self { turn, report: None }
    }

    #[inline]
    pub fn pass() -> Self {
        Self::default()
    }
}

/// A participant in a game.
///
/// `next_turn` receives the live position and must return a legal turn
/// for `color()` or pass. Implementations never keep the board mutated.
pub trait Player: Send {
    fn color(&self) -> Color;

    fn next_turn(&mut self, board: &Board) -> Decision;
}
