//! Window-side view of the game running on the worker thread

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use crate::board::{Board, Color, Move, Outcome, Pos};

use super::channel::UiEvent;

/// How a finished game looks from the window's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView {
    Won,
    Lost,
    Tie,
    /// No human seat: report the winner by name
    Neutral(Outcome),
}

impl ResultView {
    pub fn new(outcome: Outcome, perspective: Option<Color>) -> Self {
        match (outcome.winner(), perspective) {
            (None, _) => ResultView::Tie,
            (Some(winner), Some(me)) if winner == me => ResultView::Won,
            (Some(_), Some(_)) => ResultView::Lost,
            (Some(_), None) => ResultView::Neutral(outcome),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResultView::Won => "Win",
            ResultView::Lost => "Loss",
            ResultView::Tie => "Tie",
            ResultView::Neutral(_) => "Game over",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ResultView::Won => "You won!".to_string(),
            ResultView::Lost => "You lost.".to_string(),
            ResultView::Tie => "No player was able to make a move in the last round.".to_string(),
            ResultView::Neutral(outcome) => outcome.to_string(),
        }
    }
}

/// Main game state as seen by the window
pub struct GameState {
    pub board: Board,
    pub highlights: Vec<Move>,
    pub think_time: Duration,
    pub outcome: Option<Outcome>,
    /// Seat of the human player, if any
    pub perspective: Option<Color>,
    /// Board updates received, the opening board included
    pub updates: u32,
    events: Receiver<UiEvent>,
    clicks: Sender<Option<Pos>>,
    worker_gone: bool,
}

impl GameState {
    pub fn new(perspective: Option<Color>, events: Receiver<UiEvent>, clicks: Sender<Option<Pos>>) -> Self {
        Self {
            board: Board::new(),
            highlights: Vec::new(),
            think_time: Duration::ZERO,
            outcome: None,
            perspective,
            updates: 0,
            events,
            clicks,
            worker_gone: false,
        }
    }

    /// Apply every event the game thread sent since the last frame.
    ///
    /// Returns whether anything changed.
    pub fn poll_events(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.apply(event);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.worker_gone = true;
                    break;
                }
            }
        }
        changed
    }

    fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Board(board) => {
                self.board = board;
                self.updates += 1;
            }
            UiEvent::Highlight(moves) => self.highlights = moves,
            UiEvent::ThinkTime(total) => self.think_time = total,
            UiEvent::Result(outcome) => {
                self.outcome = Some(outcome);
                self.highlights.clear();
            }
        }
    }

    /// Forward a tile click to the human player.
    pub fn click(&self, pos: Option<Pos>) {
        if self.outcome.is_some() || self.perspective.is_none() {
            return;
        }
        // Nobody listening between human turns is fine
        let _ = self.clicks.send(pos);
    }

    pub fn is_running(&self) -> bool {
        self.outcome.is_none() && !self.worker_gone
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.outcome.map(|o| ResultView::new(o, self.perspective))
    }
}
