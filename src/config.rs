//! Command-line configuration
//!
//! Decides which seat is human, random or AI and how the AI players search.
//! Validation runs before any game state exists.

use std::sync::mpsc::{Receiver, Sender};

use clap::{Parser, ValueEnum};

use crate::board::{Color, Pos};
use crate::engine::AIEngine;
use crate::error::ConfigError;
use crate::eval::EvalVariant;
use crate::players::{HumanPlayer, Player, RandomPlayer};
use crate::search::ordering::MAX_KILLER_DEPTH;
use crate::ui::UiEvent;

/// Deepest base depth the searcher accepts
pub const MAX_BASE_DEPTH: u8 = (MAX_KILLER_DEPTH - 1) as u8;

/// A seat at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Gold,
    Silver,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Gold => Color::Gold,
            Side::Silver => Color::Silver,
        }
    }
}

/// Evaluator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EvalChoice {
    /// Material and flagship safety weigh the same
    Balanced,
    /// Material counts double
    MaterialWeighted,
}

impl From<EvalChoice> for EvalVariant {
    fn from(choice: EvalChoice) -> Self {
        match choice {
            EvalChoice::Balanced => EvalVariant::Balanced,
            EvalChoice::MaterialWeighted => EvalVariant::MaterialWeighted,
        }
    }
}

/// Where the game is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PresenterKind {
    /// Native window
    #[default]
    Gui,
    /// Boards printed to stdout
    Text,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Play Breakthru against an alpha-beta AI", long_about = None)]
pub struct Config {
    /// Seat played with the mouse
    #[arg(long, value_enum, default_value = "silver")]
    pub human: Side,

    /// No human seat: both sides are computer players
    #[arg(long)]
    pub no_human: bool,

    /// Seat played by uniformly random turns
    #[arg(long, value_enum)]
    pub random: Option<Side>,

    /// How the game is shown
    #[arg(long, value_enum, default_value = "gui")]
    pub presenter: PresenterKind,

    /// First iterative deepening depth for a Gold AI
    #[arg(long, default_value_t = 1)]
    pub gold_depth: u8,

    /// First iterative deepening depth for a Silver AI
    #[arg(long, default_value_t = 1)]
    pub silver_depth: u8,

    /// Evaluator of a Gold AI
    #[arg(long, value_enum, default_value = "balanced")]
    pub gold_eval: EvalChoice,

    /// Evaluator of a Silver AI
    #[arg(long, value_enum, default_value = "material-weighted")]
    pub silver_eval: EvalChoice,

    /// Stop deepening at this depth instead of spending the whole time budget
    #[arg(long)]
    pub max_depth: Option<u8>,

    /// Cut every AI search after this many nodes
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_nodes: Option<u64>,
}

/// Kind of player in one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Random,
    Ai { base_depth: i8, variant: EvalVariant },
}

/// Both players ready for a game.
pub struct Players {
    pub gold: Box<dyn Player>,
    pub silver: Box<dyn Player>,
    /// Color whose think time is reported
    pub measured: Color,
}

/// Channels a human player needs.
pub struct HumanLink {
    pub clicks: Receiver<Option<Pos>>,
    pub events: Sender<UiEvent>,
}

impl Config {
    /// Human seat after `--no-human`
    pub fn human_color(&self) -> Option<Color> {
        (!self.no_human).then(|| self.human.into())
    }

    pub fn random_color(&self) -> Option<Color> {
        self.random.map(Color::from)
    }

    /// Reject settings that cannot start a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(human), Some(random)) = (self.human_color(), self.random_color()) {
            if human == random {
                return Err(ConfigError::ConflictingPlayers(human));
            }
        }

        if self.human_color().is_some() && self.presenter == PresenterKind::Text {
            return Err(ConfigError::HumanNeedsGui);
        }

        for (color, depth) in [(Color::Gold, self.gold_depth), (Color::Silver, self.silver_depth)] {
            if depth == 0 || depth > MAX_BASE_DEPTH {
                return Err(ConfigError::InvalidDepth {
                    color,
                    depth,
                    max: MAX_BASE_DEPTH,
                });
            }
        }
        if let Some(depth) = self.max_depth {
            let base = self.gold_depth.max(self.silver_depth);
            if depth < base || depth > MAX_BASE_DEPTH {
                return Err(ConfigError::InvalidMaxDepth { depth, base });
            }
        }

        Ok(())
    }

    /// Who sits in `color`'s seat.
    pub fn seat(&self, color: Color) -> Seat {
        if self.human_color() == Some(color) {
            return Seat::Human;
        }
        if self.random_color() == Some(color) {
            return Seat::Random;
        }
        let (depth, eval) = match color {
            Color::Gold => (self.gold_depth, self.gold_eval),
            Color::Silver => (self.silver_depth, self.silver_eval),
        };
        Seat::Ai {
            base_depth: depth as i8,
            variant: eval.into(),
        }
    }

    /// Color whose think time is reported: the opponent of the human, or
    /// Silver when Gold plays randomly, Gold otherwise.
    pub fn measured_color(&self) -> Color {
        match (self.human_color(), self.random_color()) {
            (Some(human), _) => human.opponent(),
            (None, Some(Color::Gold)) => Color::Silver,
            _ => Color::Gold,
        }
    }

    /// Build both players. A human seat consumes `link`.
    pub fn build_players(&self, mut link: Option<HumanLink>) -> Result<Players, ConfigError> {
        self.validate()?;

        let mut build = |color: Color| -> Result<Box<dyn Player>, ConfigError> {
            let player: Box<dyn Player> = match self.seat(color) {
                Seat::Human => {
                    let link = link.take().ok_or(ConfigError::HumanNeedsGui)?;
                    Box::new(HumanPlayer::new(color, link.clicks, link.events))
                }
                Seat::Random => Box::new(RandomPlayer::new(color)),
                Seat::Ai { base_depth, variant } => {
                    let mut engine = AIEngine::with_config(color, base_depth, variant);
                    engine.set_max_depth(self.max_depth.map(|d| d as i8));
                    engine.set_node_limit(self.max_nodes);
                    Box::new(engine)
                }
            };
            Ok(player)
        };

        let gold = build(Color::Gold)?;
        let silver = build(Color::Silver)?;
        Ok(Players {
            gold,
            silver,
            measured: self.measured_color(),
        })
    }
}
