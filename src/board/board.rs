//! Board structure with flagship tracking

use std::fmt;

use super::{Color, Move, Outcome, Piece, Pos, Turn, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// Tiles are addressed directly by index, and moves are applied and undone
/// in place so the search never allocates a board per node. The flagship
/// location is cached and kept in sync by every tile write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Option<Piece>; TOTAL_CELLS],
    flagship: Option<Pos>,
}

impl Board {
    /// Standard opening position.
    ///
    /// Flagship on F6, Gold fleet in a square ring around it, Silver fleet
    /// in four lines of five near the edges.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);

        for i in 3..8u8 {
            for j in [1u8, 9] {
                board.put(Pos::new(i, j), Piece::Fleetship(Color::Silver));
                board.put(Pos::new(j, i), Piece::Fleetship(Color::Silver));
            }
        }

        for i in 4..7u8 {
            for j in [3u8, 7] {
                board.put(Pos::new(i, j), Piece::Fleetship(Color::Gold));
                board.put(Pos::new(j, i), Piece::Fleetship(Color::Gold));
            }
        }

        board
    }

    /// Board without any pieces, for building synthetic positions
    pub fn empty() -> Self {
        Self {
            tiles: [None; TOTAL_CELLS],
            flagship: None,
        }
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.tiles[pos.to_index()]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.tiles[pos.to_index()].is_none()
    }

    /// Check that signed coordinates are on the board
    #[inline]
    pub fn is_on_board(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn put(&mut self, pos: Pos, piece: Piece) {
        self.set(pos, Some(piece));
    }

    /// Remove the piece at a position, if any.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, None);
    }

    /// Single write path for tiles; keeps the flagship cache consistent.
    #[inline]
    fn set(&mut self, pos: Pos, piece: Option<Piece>) {
        self.tiles[pos.to_index()] = piece;
        if piece == Some(Piece::Flagship) {
            self.flagship = Some(pos);
        } else if self.flagship == Some(pos) {
            self.flagship = None;
        }
    }

    /// Cached flagship location
    #[inline]
    pub fn flagship(&self) -> Option<Pos> {
        self.flagship
    }

    /// Apply a move without legality checks.
    ///
    /// Whatever stands on the destination is overwritten (captured).
    #[inline]
    pub fn apply_move(&mut self, mv: &Move) {
        debug_assert_eq!(self.get(mv.from), Some(mv.piece));
        debug_assert_eq!(self.get(mv.to), mv.captured);
        self.set(mv.to, Some(mv.piece));
        self.set(mv.from, None);
    }

    /// Undo a move applied with [`Board::apply_move`].
    #[inline]
    pub fn undo_move(&mut self, mv: &Move) {
        debug_assert_eq!(self.get(mv.to), Some(mv.piece));
        self.set(mv.from, Some(mv.piece));
        self.set(mv.to, mv.captured);
    }

    /// Apply the first move, then the second if present
    pub fn apply_turn(&mut self, turn: &Turn) {
        self.apply_move(&turn.first);
        if let Some(second) = &turn.second {
            self.apply_move(second);
        }
    }

    /// Undo a turn, second move first
    pub fn undo_turn(&mut self, turn: &Turn) {
        if let Some(second) = &turn.second {
            self.undo_move(second);
        }
        self.undo_move(&turn.first);
    }

    /// Game result implied by the position alone.
    ///
    /// No flagship means Silver captured it; a flagship on any edge means
    /// Gold broke through.
    #[inline]
    pub fn result(&self) -> Outcome {
        match self.flagship {
            None => Outcome::SilverWon,
            Some(pos) if pos.is_edge() => Outcome::GoldWon,
            Some(_) => Outcome::Undecided,
        }
    }

    /// Occupied tiles of one color in row-major order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(idx, tile)| match tile {
            Some(piece) if piece.owner() == color => Some((Pos::from_index(idx), *piece)),
            _ => None,
        })
    }

    /// Number of pieces a color has on the board (flagship included)
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Sum of piece scores for one color
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|(_, piece)| piece.score()).sum()
    }

    /// Count of diagonal tiles each piece of `color` could capture on or
    /// move into next: on the board and either empty or opponent-held.
    pub fn controlled_squares(&self, color: Color) -> i32 {
        let mut count = 0;
        for (pos, _) in self.pieces(color) {
            for (dr, dc) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
                if let Some(target) = pos.offset(dr, dc) {
                    match self.get(target) {
                        None => count += 1,
                        Some(piece) if piece.owner() != color => count += 1,
                        Some(_) => {}
                    }
                }
            }
        }
        count
    }

    /// Silver's closeness to the flagship on a 0-100 scale.
    ///
    /// Average Manhattan distance of all Silver pieces to `flag`, mapped so
    /// that a smaller distance scores higher. No Silver pieces scores 0.
    pub fn distance_to_flagship(&self, flag: Pos) -> i32 {
        let (total, count) = self
            .pieces(Color::Silver)
            .fold((0u32, 0u32), |(total, count), (pos, _)| {
                (total + pos.manhattan(flag), count + 1)
            });

        if count == 0 {
            return 0;
        }

        let average = f64::from(total) / f64::from(count);
        (100.0 - average * 5.0) as i32
    }

    /// Flagship freedom on a 0-100 scale.
    ///
    /// Walks the four orthogonal rays from `flag` and counts tiles that are
    /// not Silver-held up to the first Silver piece or the edge. Twenty
    /// tiles are reachable at most, each worth 5 points.
    pub fn flagship_freedom(&self, flag: Pos) -> i32 {
        let mut free = 0;
        for (dr, dc) in [(-1, 0), (1, 0), (0, 1), (0, -1)] {
            let mut cursor = flag.offset(dr, dc);
            while let Some(pos) = cursor {
                if matches!(self.get(pos), Some(piece) if piece.owner() == Color::Silver) {
                    break;
                }
                free += 1;
                cursor = pos.offset(dr, dc);
            }
        }
        free * 5
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADER: &str = "a b c d e f g h i j k ";

        writeln!(f, "{HEADER}")?;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .get(Pos::new(row as u8, col as u8))
                    .map_or('_', Piece::symbol);
                write!(f, "{symbol} ")?;
            }
            writeln!(f, "{}", BOARD_SIZE - row)?;
        }
        writeln!(f, "{HEADER}")
    }
}
