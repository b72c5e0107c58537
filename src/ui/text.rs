//! Plain-text presenter for terminal games

use crate::board::{Board, Outcome};
use crate::game::Presenter;

/// Prints every board and the final outcome to stdout.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present_board(&mut self, board: Board) {
        println!("{board}");
    }

    fn present_result(&mut self, outcome: Outcome) {
        println!("{outcome}");
    }
}
