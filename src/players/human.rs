//! Mouse-driven player
//!
//! Tile clicks arrive over a channel from the GUI thread. Each click is a
//! board position, or `None` for a click outside the grid. Highlights of
//! legal destinations and the intermediate board of a two-move turn go back
//! to the GUI as [`UiEvent`]s.

use std::sync::mpsc::{Receiver, Sender};

use log::debug;

use crate::board::{Board, Color, Move, Piece, Pos, Turn};
use crate::rules::moves_for_piece;
use crate::ui::UiEvent;

use super::{Decision, Player};

pub struct HumanPlayer {
    color: Color,
    clicks: Receiver<Option<Pos>>,
    events: Sender<UiEvent>,
    /// Set by the first click that lands on the board; afterwards clicks
    /// outside the grid are ignored instead of passing.
    clicked_on_board: bool,
}

impl HumanPlayer {
    pub fn new(color: Color, clicks: Receiver<Option<Pos>>, events: Sender<UiEvent>) -> Self {
        Self {
            color,
            clicks,
            events,
            clicked_on_board: false,
        }
    }

    fn notify(&self, event: UiEvent) {
        if self.events.send(event).is_err() {
            debug!("GUI is gone, dropping event");
        }
    }

    /// Block until the next click; `None` once the GUI hung up.
    fn wait_click(&self) -> Option<Option<Pos>> {
        self.clicks.recv().ok()
    }
}

impl Player for HumanPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn next_turn(&mut self, board: &Board) -> Decision {
        let mut work_board = board.clone();
        let mut first: Option<Move> = None;

        loop {
            let Some(click) = self.wait_click() else {
                return Decision::pass();
            };
            let Some(pos) = click else {
                if self.clicked_on_board {
                    continue;
                }
                debug!("{} passes", self.color);
                return Decision::pass();
            };
            self.clicked_on_board = true;

            if work_board.get(pos).map(Piece::owner) != Some(self.color) {
                continue;
            }
            // The piece moved first cannot move again
            if first.is_some_and(|m| m.to == pos) {
                continue;
            }

            let mut moves = moves_for_piece(&work_board, pos);
            if first.is_some() {
                moves.retain(|m| !m.single);
            }
            self.notify(UiEvent::Highlight(moves.clone()));

            let Some(target) = self.wait_click() else {
                return Decision::pass();
            };
            self.notify(UiEvent::Highlight(Vec::new()));

            let Some(mv) = target.and_then(|to| moves.iter().find(|m| m.to == to).copied()) else {
                continue;
            };

            if mv.single {
                return Decision::plain(Some(Turn::single(mv)));
            }
            if let Some(m1) = first {
                return Decision::plain(Some(Turn::double(m1, mv)));
            }

            work_board.apply_move(&mv);
            self.notify(UiEvent::Board(work_board.clone()));
            if work_board.result().is_decided() {
                return Decision::plain(Some(Turn::single(mv)));
            }
            first = Some(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, TryRecvError};

    fn player_with_clicks(color: Color, clicks: &[Option<Pos>]) -> (HumanPlayer, Receiver<UiEvent>) {
        let (click_tx, click_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        for click in clicks {
            click_tx.send(*click).unwrap();
        }
        // Dropping the sender makes an exhausted script pass instead of block
        drop(click_tx);
        (HumanPlayer::new(color, click_rx, event_tx), event_rx)
    }

    fn sample_board() -> Board {
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        board.put(Pos::new(7, 2), Piece::Fleetship(Color::Gold));
        board.put(Pos::new(7, 8), Piece::Fleetship(Color::Gold));
        board.put(Pos::new(2, 2), Piece::Fleetship(Color::Silver));
        board
    }

    #[test]
    fn test_flagship_move_is_single_turn() {
        let board = sample_board();
        let (mut player, events) =
            player_with_clicks(Color::Gold, &[Some(Pos::new(5, 5)), Some(Pos::new(5, 7))]);

        let turn = player.next_turn(&board).turn.unwrap();
        assert!(turn.is_single());
        assert_eq!(turn.first.piece, Piece::Flagship);
        assert_eq!(turn.first.to, Pos::new(5, 7));

        match events.try_recv() {
            Ok(UiEvent::Highlight(moves)) => assert!(moves.iter().any(|m| m.to == Pos::new(5, 7))),
            other => panic!("expected highlight, got {other:?}"),
        }
    }

    #[test]
    fn test_two_fleetship_moves() {
        let board = sample_board();
        let clicks = [
            Some(Pos::new(7, 2)),
            Some(Pos::new(8, 2)),
            // Same piece again is ignored
            Some(Pos::new(8, 2)),
            Some(Pos::new(7, 8)),
            Some(Pos::new(9, 8)),
        ];
        let (mut player, events) = player_with_clicks(Color::Gold, &clicks);

        let turn = player.next_turn(&board).turn.unwrap();
        assert_eq!(turn.first.to, Pos::new(8, 2));
        assert_eq!(turn.second.unwrap().from, Pos::new(7, 8));
        assert_eq!(turn.second.unwrap().to, Pos::new(9, 8));

        let boards = events
            .try_iter()
            .filter(|e| matches!(e, UiEvent::Board(_)))
            .count();
        assert_eq!(boards, 1);
    }

    #[test]
    fn test_second_move_excludes_flagship() {
        let board = sample_board();
        let clicks = [
            Some(Pos::new(7, 2)),
            Some(Pos::new(8, 2)),
            // Flagship motion is single, nothing to pick
            Some(Pos::new(5, 5)),
            Some(Pos::new(5, 6)),
        ];
        let (mut player, events) = player_with_clicks(Color::Gold, &clicks);

        assert!(player.next_turn(&board).turn.is_none());
        let flagship_highlight = events.try_iter().any(|e| match e {
            UiEvent::Highlight(moves) => moves.iter().any(|m| m.piece == Piece::Flagship),
            _ => false,
        });
        assert!(!flagship_highlight);
    }

    #[test]
    fn test_outside_click_passes_only_first() {
        let board = sample_board();
        let (mut player, _events) = player_with_clicks(Color::Gold, &[None]);
        assert!(player.next_turn(&board).turn.is_none());

        let (mut player, _events) = player_with_clicks(
            Color::Gold,
            &[Some(Pos::new(0, 0)), None, Some(Pos::new(5, 5)), Some(Pos::new(4, 5))],
        );
        let turn = player.next_turn(&board).turn.unwrap();
        assert_eq!(turn.first.to, Pos::new(4, 5));
    }

    #[test]
    fn test_opponent_piece_ignored() {
        let board = sample_board();
        let (mut player, events) = player_with_clicks(Color::Gold, &[Some(Pos::new(2, 2))]);
        assert!(player.next_turn(&board).turn.is_none());
        assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn test_live_board_untouched() {
        let board = sample_board();
        let before = board.clone();
        let (mut player, _events) =
            player_with_clicks(Color::Gold, &[Some(Pos::new(7, 2)), Some(Pos::new(8, 2))]);
        let _ = player.next_turn(&board);
        assert_eq!(board, before);
    }
}
