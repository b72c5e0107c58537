//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when a turn is
//! applied. This is essential for efficient transposition table lookups
//! during search.
//!
//! # Example
//!
//! ```
//! use breakthru::board::{Board, Color};
//! use breakthru::rules::all_turns;
//! use breakthru::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let mut board = Board::new();
//!
//! let hash = zt.hash(&board, Color::Gold);
//! let turn = all_turns(&mut board, Color::Gold)[0];
//! board.apply_turn(&turn);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(zt.update_turn(hash, &turn), zt.hash(&board, Color::Silver));
//! ```

use crate::board::{Board, Color, Move, Piece, Turn, TOTAL_CELLS};

/// Number of distinct piece kinds (silver fleetship, gold fleetship, flagship)
const PIECE_KINDS: usize = 3;

/// Zobrist hash table for position hashing.
///
/// Uses XOR-based hashing with precomputed random values for each
/// (tile, piece kind) combination plus one key per side to move.
pub struct ZobristTable {
    pieces: [[u64; PIECE_KINDS]; TOTAL_CELLS],
    gold_to_move: u64,
    silver_to_move: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator (LCG) with a fixed seed
    /// to ensure reproducible hashes across different runs.
    #[must_use]
    pub fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x0B7E_A4C7_1234_5678;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            seed
        };

        let mut pieces = [[0u64; PIECE_KINDS]; TOTAL_CELLS];
        for tile in pieces.iter_mut() {
            for key in tile.iter_mut() {
                *key = next_rand();
            }
        }

        Self {
            pieces,
            gold_to_move: next_rand(),
            silver_to_move: next_rand(),
        }
    }

    #[inline]
    fn piece_key(&self, idx: usize, piece: Piece) -> u64 {
        self.pieces[idx][piece.zobrist_index()]
    }

    #[inline]
    fn side_key(&self, side_to_move: Color) -> u64 {
        match side_to_move {
            Color::Gold => self.gold_to_move,
            Color::Silver => self.silver_to_move,
        }
    }

    /// Compute the full hash for a board position.
    ///
    /// This iterates over every tile. During search use [`update_turn`]
    /// instead.
    ///
    /// [`update_turn`]: ZobristTable::update_turn
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Color) -> u64 {
        let mut h = self.side_key(side_to_move);
        for color in Color::ALL {
            for (pos, piece) in board.pieces(color) {
                h ^= self.piece_key(pos.to_index(), piece);
            }
        }
        h
    }

    /// Incrementally update the piece keys for one move.
    ///
    /// Does not touch the side-to-move component.
    #[inline]
    #[must_use]
    pub fn update_move(&self, hash: u64, mv: &Move) -> u64 {
        let mut h = hash;
        h ^= self.piece_key(mv.from.to_index(), mv.piece);
        if let Some(captured) = mv.captured {
            h ^= self.piece_key(mv.to.to_index(), captured);
        }
        h ^ self.piece_key(mv.to.to_index(), mv.piece)
    }

    /// Incrementally update the hash for a whole turn and pass the move
    /// to the other side.
    #[inline]
    #[must_use]
    pub fn update_turn(&self, hash: u64, turn: &Turn) -> u64 {
        let h = turn.moves().fold(hash, |h, mv| self.update_move(h, mv));
        self.toggle_side(h)
    }

    /// Flip the side to move.
    #[inline]
    #[must_use]
    pub fn toggle_side(&self, hash: u64) -> u64 {
        hash ^ self.gold_to_move ^ self.silver_to_move
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
