//! Search module for the Breakthru AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Killer turns and turn ordering
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod ordering;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{IterationStats, SearchResult, SearchStats, Searcher, TIME_BUDGET};
pub use ordering::{order_turns, KillerMoves};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
