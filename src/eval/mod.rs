//! Position evaluation for Breakthru
//!
//! Contains:
//! - Normalized features (material, flagship safety, control, mobility)
//! - The two evaluator variants used by the search

pub mod features;
pub mod heuristic;

pub use features::{control_balance, flagship_score, material_balance, mobility_balance};
pub use heuristic::{evaluate, terminal_score, EvalBreakdown, EvalVariant, WIN_SCORE};
