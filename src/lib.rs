//! Breakthru AI engine
//!
//! Breakthru is played on an 11x11 board:
//! - Gold owns the flagship and twelve fleetships and moves first
//! - Gold wins by bringing the flagship to any edge tile
//! - Silver owns twenty fleetships and wins by capturing the flagship
//! - A turn is one capture or flagship move, or two ordinary fleetship moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, pieces, moves and turns
//! - [`rules`]: Capture, motion and turn generation
//! - [`eval`]: Position evaluation
//! - [`search`]: Zobrist hashing, transposition table, alpha-beta search
//! - [`engine`]: AI player wrapping the searcher
//! - [`players`]: Player contract, random and human players
//! - [`game`]: Game driver and presenter contract
//! - [`ui`]: Text and GUI presenters
//! - [`config`]: Command-line configuration
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use breakthru::{AIEngine, Board, Color, EvalVariant};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(Color::Gold, 1, EvalVariant::Balanced)
//!     .with_tt_bits(16)
//!     .with_time_budget(Duration::from_millis(500));
//!
//! // Gold opens
//! if let Some(turn) = engine.get_turn(&board) {
//!     board.apply_turn(&turn);
//!     println!("Gold plays {turn}");
//! }
//! ```
//!
//! # Search
//!
//! Each AI turn runs iterative deepening negamax with alpha-beta pruning
//! for up to [`search::TIME_BUDGET`]. Turns are ordered by the
//! transposition table hint, then killer turns, then one-move turns first.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod players;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Move, Outcome, Piece, Pos, Turn, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{AppError, ConfigError};
pub use eval::{EvalVariant, WIN_SCORE};
pub use game::{Game, GameSummary, Presenter, ThinkStats};
pub use players::{Decision, Player};
