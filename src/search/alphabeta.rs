//! Alpha-Beta search with iterative deepening and transposition table
//!
//! This module implements the core search algorithm for the Breakthru AI.
//! It uses negamax with alpha-beta pruning and a transposition table.
//!
//! # Features
//!
//! - Iterative deepening under a wall-clock budget
//! - Transposition table probing and storing at every node
//! - Killer turns and TT turns for move ordering
//! - Early stop when a forced win is proven
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use breakthru::board::{Board, Color, Piece, Pos};
//! use breakthru::eval::{EvalVariant, WIN_SCORE};
//! use breakthru::search::Searcher;
//!
//! // Flagship one slide away from the top edge
//! let mut board = Board::empty();
//! board.put(Pos::new(1, 5), Piece::Flagship);
//! board.put(Pos::new(9, 9), Piece::Fleetship(Color::Silver));
//!
//! let mut searcher = Searcher::new(Color::Gold, 1, EvalVariant::Balanced)
//!     .with_tt_bits(12)
//!     .with_time_budget(Duration::from_secs(5));
//! let result = searcher.search(&board, 3);
//! assert_eq!(result.score, WIN_SCORE);
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Color, Turn};
use crate::eval::{evaluate, EvalVariant, WIN_SCORE};
use crate::rules::all_turns;

use super::ordering::{order_turns, KillerMoves, MAX_KILLER_DEPTH};
use super::tt::DEFAULT_INDEX_BITS;
use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE;

/// Wall-clock budget for one search
pub const TIME_BUDGET: Duration = Duration::from_secs(30);

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first turn tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score (exact/bound hit)
    pub tt_score_hits: u64,
    /// TT probes that provided a best turn for ordering
    pub tt_move_hits: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// TT score hit rate in percent
    pub fn tt_score_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_score_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }

    /// Add the counters of another search.
    pub fn merge(&mut self, other: &SearchStats) {
        self.beta_cutoffs += other.beta_cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
        self.tt_probes += other.tt_probes;
        self.tt_score_hits += other.tt_score_hits;
        self.tt_move_hits += other.tt_move_hits;
    }
}

/// One completed iterative deepening pass.
#[derive(Debug, Clone)]
pub struct IterationStats {
    /// Depth argument the root was searched with
    pub depth: i8,
    /// Nodes visited in this pass
    pub nodes: u64,
    /// Time since the search started when the pass completed
    pub elapsed: Duration,
    /// Root score of the pass
    pub score: i32,
    /// Best root turn of the pass
    pub best_turn: Option<Turn>,
}

/// Search result containing the best turn found and associated statistics.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Best turn found, `None` when the side to move has no legal turn
    pub best_turn: Option<Turn>,
    /// Root score of the last completed depth
    pub score: i32,
    /// Last completed depth, 0 if none completed
    pub depth: i8,
    /// Total nodes searched
    pub nodes: u64,
    /// Whether the time budget or node limit cut the search short
    pub timed_out: bool,
    /// Completed passes in increasing depth order
    pub iterations: Vec<IterationStats>,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-Beta search engine with iterative deepening and transposition table.
///
/// A searcher plays one color with one evaluator. The transposition table
/// persists across searches; call [`Searcher::clear_tt`] for a new game.
pub struct Searcher {
    color: Color,
    base_depth: i8,
    variant: EvalVariant,
    time_budget: Duration,
    /// Optional cap on nodes per search
    node_limit: Option<u64>,
    zobrist: ZobristTable,
    tt: TranspositionTable,
    killers: KillerMoves,
    // Per-search state
    nodes: u64,
    start: Instant,
    timed_out: bool,
    root_depth: i8,
    root_best: Option<Turn>,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher for `color` starting iterative deepening at
    /// `base_depth`.
    ///
    /// Uses a 2^20 slot transposition table and [`TIME_BUDGET`].
    #[must_use]
    pub fn new(color: Color, base_depth: i8, variant: EvalVariant) -> Self {
        Self {
            color,
            base_depth: base_depth.max(1),
            variant,
            time_budget: TIME_BUDGET,
            node_limit: None,
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(DEFAULT_INDEX_BITS),
            killers: KillerMoves::new(),
            nodes: 0,
            start: Instant::now(),
            timed_out: false,
            root_depth: 0,
            root_best: None,
            stats: SearchStats::default(),
        }
    }

    /// Replace the transposition table with one of `2^bits` slots.
    #[must_use]
    pub fn with_tt_bits(mut self, bits: u32) -> Self {
        self.tt = TranspositionTable::new(bits);
        self
    }

    /// Override the wall-clock budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Stop once a search has visited `limit` nodes, as if time ran out.
    pub fn set_node_limit(&mut self, limit: Option<u64>) {
        self.node_limit = limit;
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    fn should_stop(&self) -> bool {
        if self.node_limit.is_some_and(|limit| self.nodes >= limit) {
            return true;
        }
        self.start.elapsed() > self.time_budget
    }

    /// Iterative deepening until the time budget runs out or a win is proven.
    #[must_use]
    pub fn search_timed(&mut self, board: &Board) -> SearchResult {
        self.iterate(board, None)
    }

    /// Iterative deepening that also stops after completing `max_depth`.
    ///
    /// The time budget still applies.
    #[must_use]
    pub fn search(&mut self, board: &Board, max_depth: i8) -> SearchResult {
        self.iterate(board, Some(max_depth))
    }

    fn iterate(&mut self, board: &Board, max_depth: Option<i8>) -> SearchResult {
        self.start = Instant::now();
        self.timed_out = false;
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.root_best = None;

        let mut result = SearchResult::default();
        let mut work_board = board.clone();
        let color = self.color;

        if work_board.result().is_decided() {
            return result;
        }

        let legal = all_turns(&mut work_board, color);
        let Some(&fallback) = legal.first() else {
            debug!("{color} has no legal turn");
            return result;
        };

        let root_hash = self.zobrist.hash(&work_board, color);
        let mut depth = self.base_depth;

        loop {
            self.root_depth = depth;
            self.root_best = None;
            self.killers.clear();
            let nodes_before = self.nodes;

            let score = self.negamax(&mut work_board, depth, -INF, INF, color, root_hash);

            if self.timed_out {
                result.timed_out = true;
                break;
            }

            let best = self.root_best.unwrap_or(fallback);
            result.best_turn = Some(best);
            result.score = score;
            result.depth = depth;
            result.iterations.push(IterationStats {
                depth,
                nodes: self.nodes - nodes_before,
                elapsed: self.start.elapsed(),
                score,
                best_turn: Some(best),
            });
            debug!("Completed search with depth {depth}. Best turn so far: {best} ({score})");

            if score >= WIN_SCORE {
                break;
            }
            if max_depth.is_some_and(|max| depth >= max) {
                break;
            }
            if depth as usize + 1 >= MAX_KILLER_DEPTH {
                break;
            }
            depth += 1;
        }

        // A pass cut short before any depth completed still leaves its
        // provisional root turn.
        if result.best_turn.is_none() {
            result.best_turn = Some(self.root_best.unwrap_or(fallback));
        }

        result.nodes = self.nodes;
        result.stats = self.stats.clone();
        result
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// Returns the score from `color`'s perspective. On timeout the current
    /// alpha is returned only to unwind the recursion.
    fn negamax(
        &mut self,
        board: &mut Board,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        color: Color,
        hash: u64,
    ) -> i32 {
        if self.should_stop() {
            self.timed_out = true;
            return alpha;
        }
        self.nodes += 1;

        let alpha_orig = alpha;
        let is_root = depth == self.root_depth;

        // TT probe
        let mut tt_turn = None;
        self.stats.tt_probes += 1;
        if let Some(entry) = self.tt.retrieve(hash).copied() {
            if entry.depth >= depth {
                match entry.entry_type {
                    EntryType::Exact => {
                        self.stats.tt_score_hits += 1;
                        if is_root {
                            self.root_best = entry.best_turn;
                        }
                        return entry.score;
                    }
                    EntryType::LowerBound => alpha = alpha.max(entry.score),
                    EntryType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    self.stats.tt_score_hits += 1;
                    if is_root {
                        self.root_best = entry.best_turn;
                    }
                    return entry.score;
                }
            } else {
                self.stats.tt_move_hits += 1;
                tt_turn = entry.best_turn;
            }
        }

        if depth <= 0 || board.result().is_decided() {
            return evaluate(board, color, self.variant);
        }

        let mut turns = all_turns(board, color);
        if turns.is_empty() {
            return evaluate(board, color, self.variant);
        }
        order_turns(&mut turns, self.killers.get(depth as usize), tt_turn.as_ref());

        let mut best_turn = turns[0];
        let mut best_score = -INF;

        for (i, turn) in turns.iter().enumerate() {
            board.apply_turn(turn);
            let child_hash = self.zobrist.update_turn(hash, turn);
            let value = -self.negamax(board, depth - 1, -beta, -alpha, color.opponent(), child_hash);
            board.undo_turn(turn);

            if self.timed_out {
                return alpha;
            }

            if value > best_score {
                best_score = value;
                best_turn = *turn;
                if best_score > alpha {
                    alpha = best_score;
                    if is_root {
                        self.root_best = Some(*turn);
                        debug!("{turn} depth:{depth} score:{best_score}");
                    }
                }
                if best_score >= beta {
                    self.stats.beta_cutoffs += 1;
                    if i == 0 {
                        self.stats.first_move_cutoffs += 1;
                    }
                    self.killers.add(*turn, depth as usize);
                    break;
                }
            }
        }

        let entry_type = EntryType::classify(best_score, alpha_orig, beta);
        self.tt.store(hash, depth, best_score, entry_type, Some(best_turn));

        // Fail low at the root: keep the best of the bad turns
        if is_root && self.root_best.is_none() {
            self.root_best = Some(best_turn);
        }

        best_score
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Clear the transposition table.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Outcome, Piece, Pos};

    fn searcher(color: Color) -> Searcher {
        Searcher::new(color, 1, EvalVariant::Balanced)
            .with_tt_bits(14)
            .with_time_budget(Duration::from_secs(20))
    }

    /// Flagship on C9 with a clear file to the top edge, a few silver ships
    /// far away.
    fn breakout_position() -> Board {
        let mut board = Board::empty();
        board.put(Pos::new(2, 2), Piece::Flagship);
        board.put(Pos::new(8, 8), Piece::Fleetship(Color::Silver));
        board.put(Pos::new(9, 7), Piece::Fleetship(Color::Silver));
        board
    }

    /// Small closed position: both sides have a handful of turns.
    fn quiet_position() -> Board {
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        // Gold ships hemmed in by the edge
        board.put(Pos::new(4, 4), Piece::Fleetship(Color::Gold));
        board.put(Pos::new(4, 6), Piece::Fleetship(Color::Gold));
        // Silver ring around the flagship's files
        for pos in [(3, 5), (7, 5), (5, 3), (5, 7)] {
            board.put(Pos::new(pos.0, pos.1), Piece::Fleetship(Color::Silver));
        }
        board
    }

    #[test]
    fn test_finds_breakout_at_depth_one() {
        let board = breakout_position();
        let mut searcher = searcher(Color::Gold);

        let result = searcher.search(&board, 4);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.depth, 1, "a proven win stops deepening");
        assert_eq!(result.iterations.len(), 1);

        let turn = result.best_turn.unwrap();
        let mut after = board.clone();
        after.apply_turn(&turn);
        assert_eq!(after.result(), Outcome::GoldWon);
    }

    #[test]
    fn test_silver_captures_flagship() {
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        board.put(Pos::new(6, 6), Piece::Fleetship(Color::Silver));
        board.put(Pos::new(0, 0), Piece::Fleetship(Color::Silver));

        let mut searcher = searcher(Color::Silver);
        let result = searcher.search(&board, 3);
        assert_eq!(result.score, WIN_SCORE);

        let turn = result.best_turn.unwrap();
        assert_eq!(turn.first.captured, Some(Piece::Flagship));
    }

    #[test]
    fn test_depths_strictly_increase() {
        let board = quiet_position();
        let mut searcher = searcher(Color::Gold);

        let result = searcher.search(&board, 2);
        assert!(!result.timed_out);
        let depths: Vec<i8> = result.iterations.iter().map(|it| it.depth).collect();
        assert_eq!(depths, vec![1, 2]);
        assert_eq!(result.depth, *depths.last().unwrap());
        assert!(result.best_turn.is_some());
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = quiet_position();
        let before = board.clone();
        let mut searcher = searcher(Color::Silver);
        let _ = searcher.search(&board, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_best_turn_is_legal() {
        let mut board = quiet_position();
        let mut searcher = searcher(Color::Gold);
        let result = searcher.search(&board, 2);

        let legal = all_turns(&mut board, Color::Gold);
        assert!(legal.contains(&result.best_turn.unwrap()));
    }

    #[test]
    fn test_no_legal_turn_passes() {
        // A lone silver ship in the corner cannot complete a turn
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        board.put(Pos::new(0, 0), Piece::Fleetship(Color::Silver));

        let mut searcher = searcher(Color::Silver);
        let result = searcher.search_timed(&board);
        assert!(result.best_turn.is_none());
        assert!(result.iterations.is_empty());
    }

    #[test]
    fn test_timeout_still_returns_turn() {
        let board = Board::new();
        let mut searcher = Searcher::new(Color::Gold, 1, EvalVariant::Balanced)
            .with_tt_bits(12)
            .with_time_budget(Duration::ZERO);

        let result = searcher.search_timed(&board);
        assert!(result.timed_out);
        assert!(result.best_turn.is_some());
        assert!(result.iterations.is_empty());
    }

    #[test]
    fn test_cut_pass_keeps_last_completed_turn() {
        let board = quiet_position();
        let full = searcher(Color::Gold).search(&board, 2);
        assert_eq!(full.iterations.len(), 2);
        let first_pass = &full.iterations[0];

        // Enough nodes for depth 1, the second pass stops after its root
        let mut cut = searcher(Color::Gold);
        cut.set_node_limit(Some(first_pass.nodes + 1));
        let result = cut.search(&board, 2);

        assert!(result.timed_out);
        assert_eq!(result.depth, 1);
        assert_eq!(result.iterations.len(), 1);
        assert_eq!(result.score, first_pass.score);
        assert_eq!(result.best_turn, first_pass.best_turn);
        assert_eq!(result.best_turn, result.iterations.last().unwrap().best_turn);
    }

    #[test]
    fn test_node_limit_before_first_pass() {
        let board = quiet_position();
        let mut searcher = searcher(Color::Silver);
        searcher.set_node_limit(Some(1));

        let result = searcher.search_timed(&board);
        assert!(result.timed_out);
        assert!(result.iterations.is_empty());
        assert!(result.best_turn.is_some());
    }

    #[test]
    fn test_tt_filled_after_search() {
        let board = quiet_position();
        let mut searcher = searcher(Color::Gold);
        let _ = searcher.search(&board, 2);
        assert!(searcher.tt_stats().used > 0);

        searcher.clear_tt();
        assert_eq!(searcher.tt_stats().used, 0);
    }

    #[test]
    fn test_repeat_search_agrees() {
        let board = breakout_position();
        let mut searcher = searcher(Color::Gold);
        let first = searcher.search(&board, 2);
        let second = searcher.search(&board, 2);
        assert_eq!(first.score, second.score);
        assert_eq!(second.score, WIN_SCORE);
    }

    #[test]
    fn test_stats_rates_bounded() {
        let board = quiet_position();
        let mut searcher = searcher(Color::Silver);
        let result = searcher.search(&board, 2);
        assert!(result.nodes > 0);
        assert!(result.stats.tt_probes >= result.nodes);
        assert!((0.0..=100.0).contains(&result.stats.first_move_rate()));
        assert!((0.0..=100.0).contains(&result.stats.tt_score_rate()));

        let mut total = SearchStats::default();
        total.merge(&result.stats);
        total.merge(&result.stats);
        assert_eq!(total.tt_probes, 2 * result.stats.tt_probes);
        assert_eq!(total.beta_cutoffs, 2 * result.stats.beta_cutoffs);
    }
}
