//! Error types for the binary

use thiserror::Error;

use crate::board::Color;

/// Command-line settings that cannot start a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("human and random player can't play with the same color ({0})")]
    ConflictingPlayers(Color),

    #[error("a human player needs the GUI presenter")]
    HumanNeedsGui,

    #[error("search depth for {color} must be between 1 and {max}, got {depth}")]
    InvalidDepth { color: Color, depth: u8, max: u8 },

    #[error("max depth {depth} must be between the base depth {base} and 63")]
    InvalidMaxDepth { depth: u8, base: u8 },
}

/// Anything that stops the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("GUI failed: {0}")]
    Gui(#[from] eframe::Error),
}
