//! Main AI Engine wrapping the searcher
//!
//! This module provides the AI player used by the game driver. Each engine
//! plays one color with one evaluator and keeps its transposition table
//! between turns of the same game.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use breakthru::{AIEngine, Board, Color, EvalVariant, Piece, Pos, SearchType};
//!
//! let mut engine = AIEngine::with_config(Color::Gold, 1, EvalVariant::Balanced)
//!     .with_tt_bits(12)
//!     .with_time_budget(Duration::from_secs(5));
//!
//! let mut board = Board::empty();
//! board.put(Pos::new(1, 5), Piece::Flagship);
//! board.put(Pos::new(9, 2), Piece::Fleetship(Color::Silver));
//!
//! let result = engine.get_move_with_stats(&board);
//! assert_eq!(result.search_type, SearchType::ProvenWin);
//! println!("Best turn: {}", result.best_turn.unwrap());
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Color, Turn};
use crate::eval::{EvalVariant, WIN_SCORE};
use crate::players::{Decision, Player};
use crate::search::{IterationStats, SearchResult, SearchStats, Searcher, TTStats};

/// How the search that produced a result ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The side to move had no legal turn
    NoTurn,
    /// A forced win was proven and deepening stopped early
    ProvenWin,
    /// The optional depth limit was reached
    DepthLimit,
    /// The time budget ran out
    TimedOut,
}

/// Result of a turn search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best turn found, `None` for a pass
    pub best_turn: Option<Turn>,
    /// Root score of the last completed depth
    pub score: i32,
    /// Last completed depth
    pub depth: i8,
    /// How the search ended
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Completed iterations, shallowest first
    pub iterations: Vec<IterationStats>,
    /// Cutoff and transposition table counters
    pub stats: SearchStats,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        let search_type = if result.best_turn.is_none() {
            SearchType::NoTurn
        } else if result.timed_out {
            SearchType::TimedOut
        } else if result.score >= WIN_SCORE {
            SearchType::ProvenWin
        } else {
            SearchType::DepthLimit
        };

        Self {
            best_turn: result.best_turn,
            score: result.score,
            depth: result.depth,
            search_type,
            time_ms,
            nodes: result.nodes,
            iterations: result.iterations,
            stats: result.stats,
        }
    }
}

/// Alpha-beta AI player.
///
/// Without a depth limit every call uses the full time budget unless a
/// forced win is found first.
pub struct AIEngine {
    searcher: Searcher,
    /// Optional depth at which deepening stops
    max_depth: Option<i8>,
}

impl AIEngine {
    /// Engine with base depth 1, the balanced evaluator and the default
    /// time budget.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::with_config(color, 1, EvalVariant::default())
    }

    /// Engine with a custom base depth and evaluator.
    ///
    /// # Example
    ///
    /// ```
    /// use breakthru::{AIEngine, Color, EvalVariant};
    ///
    /// let engine = AIEngine::with_config(Color::Silver, 2, EvalVariant::MaterialWeighted);
    /// assert_eq!(engine.color(), Color::Silver);
    /// ```
    #[must_use]
    pub fn with_config(color: Color, base_depth: i8, variant: EvalVariant) -> Self {
        Self {
            searcher: Searcher::new(color, base_depth, variant),
            max_depth: None,
        }
    }

    /// Override the time budget of every search.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.searcher = self.searcher.with_time_budget(budget);
        self
    }

    /// Use a transposition table of `2^bits` slots.
    #[must_use]
    pub fn with_tt_bits(mut self, bits: u32) -> Self {
        self.searcher = self.searcher.with_tt_bits(bits);
        self
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.searcher.color()
    }

    /// Stop deepening after `depth`; `None` searches until the budget is spent.
    pub fn set_max_depth(&mut self, depth: Option<i8>) {
        self.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<i8> {
        self.max_depth
    }

    /// Cut every search after `limit` nodes.
    pub fn set_node_limit(&mut self, limit: Option<u64>) {
        self.searcher.set_node_limit(limit);
    }

    /// Get the best turn for the given position, `None` to pass.
    #[must_use]
    pub fn get_turn(&mut self, board: &Board) -> Option<Turn> {
        self.get_move_with_stats(board).best_turn
    }

    /// Get the best turn with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let result = match self.max_depth {
            Some(depth) => self.searcher.search(board, depth),
            None => self.searcher.search_timed(board),
        };

        let time_ms = start.elapsed().as_millis() as u64;
        let report = MoveResult::from_search(result, time_ms);
        debug!(
            "{} searched {} nodes to depth {} in {}ms ({:?}), cutoffs {} ({:.1}% first), TT hits {:.1}%",
            self.color(),
            report.nodes,
            report.depth,
            report.time_ms,
            report.search_type,
            report.stats.beta_cutoffs,
            report.stats.first_move_rate(),
            report.stats.tt_score_rate()
        );
        report
    }

    /// Clear the transposition table cache.
    ///
    /// Call this when starting a new game to avoid stale positions.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_tt();
    }

    /// Get transposition table statistics.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

impl Player for AIEngine {
    fn color(&self) -> Color {
        AIEngine::color(self)
    }

    fn next_turn(&mut self, board: &Board) -> Decision {
        let report = self.get_move_with_stats(board);
        Decision {
            turn: report.best_turn,
            report: Some(report),
        }
    }
}
