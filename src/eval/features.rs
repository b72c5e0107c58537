//! Normalized evaluation features
//!
//! Every feature is scored from the evaluating color's perspective. The
//! balance features express the difference to the opponent as a percentage
//! of the evaluating color's own total.

use crate::board::{Board, Color};
use crate::rules::all_moves;

/// Score returned by a balance feature when the evaluating side has
/// nothing of its own to divide by.
pub const EMPTY_SIDE_BALANCE: i32 = -100;

/// `100 * (own - opp) / own`, guarded against an empty own side.
#[inline]
fn balance(own: i32, opp: i32) -> i32 {
    if own == 0 {
        return EMPTY_SIDE_BALANCE;
    }
    100 * (own - opp) / own
}

/// Material balance as a signed percentage of `color`'s material.
pub fn material_balance(board: &Board, color: Color) -> i32 {
    balance(board.material(color), board.material(color.opponent()))
}

/// Flagship safety on a 0-100 scale.
///
/// Gold values the flagship's freedom along its four rays, Silver values
/// how close its fleet has closed in. Without a flagship both score 0.
pub fn flagship_score(board: &Board, color: Color) -> i32 {
    let Some(flag) = board.flagship() else {
        return 0;
    };
    match color {
        Color::Gold => board.flagship_freedom(flag),
        Color::Silver => board.distance_to_flagship(flag),
    }
}

/// Controlled-squares balance as a signed percentage.
pub fn control_balance(board: &Board, color: Color) -> i32 {
    balance(
        board.controlled_squares(color),
        board.controlled_squares(color.opponent()),
    )
}

/// Mobility balance (count of single moves) as a signed percentage.
pub fn mobility_balance(board: &Board, color: Color) -> i32 {
    let own = all_moves(board, color).len() as i32;
    let opp = all_moves(board, color.opponent()).len() as i32;
    balance(own, opp)
}
