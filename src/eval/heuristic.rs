//! Heuristic evaluation function for Breakthru positions
//!
//! This module provides the static evaluation used at the search horizon.
//! It scores positions based on:
//! - Win/loss detection (flagship captured or on the edge)
//! - Material balance
//! - Flagship safety (freedom for Gold, encirclement for Silver)
//!
//! Non-terminal scores stay within a few hundred points, far below
//! [`WIN_SCORE`].

use crate::board::{Board, Color, Outcome};

use super::features::{control_balance, flagship_score, material_balance, mobility_balance};

/// Score of a decided position, also used as the search infinity.
pub const WIN_SCORE: i32 = 1_000_000;

/// Which combination of features the evaluator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalVariant {
    /// Material counts double before averaging with the flagship score
    MaterialWeighted,
    /// Material and flagship score weigh the same
    #[default]
    Balanced,
}

/// Sentinel for a decided position from `color`'s point of view.
///
/// Returns `None` while the game is still open.
#[inline]
pub fn terminal_score(outcome: Outcome, color: Color) -> Option<i32> {
    let winner = outcome.winner()?;
    Some(if winner == color { WIN_SCORE } else { -WIN_SCORE })
}

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - `WIN_SCORE` / `-WIN_SCORE` mark a decided game
#[must_use]
pub fn evaluate(board: &Board, color: Color, variant: EvalVariant) -> i32 {
    if let Some(score) = terminal_score(board.result(), color) {
        return score;
    }

    let material = material_balance(board, color);
    let flagship = flagship_score(board, color);

    match variant {
        EvalVariant::MaterialWeighted => (2 * material + flagship) / 2,
        EvalVariant::Balanced => (material + flagship) / 2,
    }
}

/// Every evaluation feature for one side, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub flagship: i32,
    pub control: i32,
    pub mobility: i32,
    pub score: i32,
}

impl EvalBreakdown {
    pub fn of(board: &Board, color: Color, variant: EvalVariant) -> Self {
        Self {
            material: material_balance(board, color),
            flagship: flagship_score(board, color),
            control: control_balance(board, color),
            mobility: mobility_balance(board, color),
            score: evaluate(board, color, variant),
        }
    }
}
