//! Presenters for the Breakthru game
//!
//! The GUI uses egui/eframe and talks to the game thread over channels.
//! The text presenter prints to the terminal.

mod app;
mod board_view;
mod channel;
mod game_state;
mod text;
mod theme;

pub use app::BreakthruApp;
pub use channel::{ChannelPresenter, UiEvent};
pub use game_state::{GameState, ResultView};
pub use text::TextPresenter;
