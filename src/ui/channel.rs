//! Messages from the game thread to the GUI thread

use std::sync::mpsc::Sender;
use std::time::Duration;

use log::debug;

use crate::board::{Board, Move, Outcome};
use crate::game::Presenter;

/// Everything the game thread tells the window.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// New position to draw
    Board(Board),
    /// Destinations to highlight; empty clears the highlight
    Highlight(Vec<Move>),
    /// Accumulated think time of the measured player
    ThinkTime(Duration),
    /// Final outcome
    Result(Outcome),
}

/// Presenter that forwards to the GUI over a channel.
pub struct ChannelPresenter {
    events: Sender<UiEvent>,
}

impl ChannelPresenter {
    pub fn new(events: Sender<UiEvent>) -> Self {
        Self { events }
    }

    fn send(&self, event: UiEvent) {
        if self.events.send(event).is_err() {
            debug!("window closed, event dropped");
        }
    }
}

impl Presenter for ChannelPresenter {
    fn present_board(&mut self, board: Board) {
        self.send(UiEvent::Board(board));
    }

    fn present_result(&mut self, outcome: Outcome) {
        self.send(UiEvent::Result(outcome));
    }

    fn present_think_time(&mut self, total: Duration) {
        self.send(UiEvent::ThinkTime(total));
    }
}
