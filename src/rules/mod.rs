//! Move and turn generation for Breakthru
//!
//! This module implements the movement rules:
//! - Capture moves (one diagonal step onto an opposing piece)
//! - Motion moves (orthogonal slides of any length over empty tiles)
//! - Turn composition (one single move, or two ordinary moves by different pieces)

pub mod capture;
pub mod motion;
pub mod turns;

// Re-exports for convenient access
pub use capture::capture_moves;
pub use motion::motion_moves;
pub use turns::{all_moves, all_turns, moves_for_piece};
