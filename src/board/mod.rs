//! Board representation for Breakthru

pub mod board;
pub mod moves;


// Re-exports
pub use board::Board;
pub use moves::{Move, Turn};

use std::fmt;

/// Board size (11x11)
pub const BOARD_SIZE: usize = 11;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 121

/// File letters used by the algebraic notation, indexed by column.
pub const FILES: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K'];

/// Side colors.
///
/// Gold owns the flagship and moves first, Silver defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gold,
    Silver,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Gold => Color::Silver,
            Color::Silver => Color::Gold,
        }
    }

    /// Both colors in playing order.
    pub const ALL: [Color; 2] = [Color::Gold, Color::Silver];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Gold => write!(f, "Gold"),
            Color::Silver => write!(f, "Silver"),
        }
    }
}

/// A piece on the board.
///
/// The two variants differ only in score, symbol and whether a motion
/// move ends the turn, so they share one type with a small behavior table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    /// Gold's single flagship
    Flagship,
    /// An ordinary sliding ship of either side
    Fleetship(Color),
}

impl Piece {
    /// Owning color
    #[inline]
    pub fn owner(self) -> Color {
        match self {
            Piece::Flagship => Color::Gold,
            Piece::Fleetship(color) => color,
        }
    }

    /// Material score: flagship 4, gold fleetship 3, silver fleetship 2
    #[inline]
    pub fn score(self) -> i32 {
        match self {
            Piece::Flagship => 4,
            Piece::Fleetship(Color::Gold) => 3,
            Piece::Fleetship(Color::Silver) => 2,
        }
    }

    #[inline]
    pub fn is_flagship(self) -> bool {
        matches!(self, Piece::Flagship)
    }

    /// Whether a motion move by this piece ends the turn.
    #[inline]
    pub fn motion_is_single(self) -> bool {
        self.is_flagship()
    }

    /// Slot used by the Zobrist key table (0..3).
    #[inline]
    pub fn zobrist_index(self) -> usize {
        (self.score() - 2) as usize
    }

    /// One-letter symbol used by the text board
    pub fn symbol(self) -> char {
        match self {
            Piece::Flagship => 'f',
            Piece::Fleetship(Color::Gold) => 'g',
            Piece::Fleetship(Color::Silver) => 's',
        }
    }
}

/// Position on the board, row 0 is the far (top) edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbour at a signed offset, if it is still on the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Whether the position lies on one of the four board edges.
    #[inline]
    pub fn is_edge(self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    /// Iterate every position in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl fmt::Display for Pos {
    /// Algebraic notation: file letter and rank counted from the bottom edge.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILES[self.col as usize],
            BOARD_SIZE - self.row as usize
        )
    }
}

/// Game outcome.
///
/// The board itself can only report a win or `Undecided`; `Tie` comes
/// from the game driver after two consecutive passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    GoldWon,
    SilverWon,
    Tie,
    Undecided,
}

impl Outcome {
    /// Winner of a decided game
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::GoldWon => Some(Color::Gold),
            Outcome::SilverWon => Some(Color::Silver),
            Outcome::Tie | Outcome::Undecided => None,
        }
    }

    #[inline]
    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::GoldWon => write!(f, "Gold won!"),
            Outcome::SilverWon => write!(f, "Silver won!"),
            Outcome::Tie => write!(f, "No player made a turn, tie!"),
            Outcome::Undecided => write!(f, "Undecided"),
        }
    }
}
