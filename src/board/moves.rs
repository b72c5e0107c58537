//! Moves and turns

use std::cmp::Ordering;
use std::fmt;

use super::{Piece, Pos};

/// One piece relocation.
///
/// `single` marks a move that ends the turn on its own: every capture and
/// every flagship move. `captured` records what stood on `to` so the move
/// can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub single: bool,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos, piece: Piece, captured: Option<Piece>, single: bool) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            single,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// One full ply for one color.
///
/// Either a single move, or two non-single moves where the second does not
/// move the piece that moved first. A one-move turn may also hold a
/// non-single move when that move already decided the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub first: Move,
    pub second: Option<Move>,
}

impl Turn {
    #[inline]
    pub fn single(first: Move) -> Self {
        Self {
            first,
            second: None,
        }
    }

    #[inline]
    pub fn double(first: Move, second: Move) -> Self {
        debug_assert!(!first.single && !second.single);
        debug_assert!(second.from != first.to);
        Self {
            first,
            second: Some(second),
        }
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.second.is_none()
    }

    /// Moves in application order
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        std::iter::once(&self.first).chain(self.second.iter())
    }

    /// Tie-break order used by move ordering: one-move turns first.
    ///
    /// Turns of the same class compare equal, so a stable sort keeps
    /// generation order inside each class. This is independent of `Eq`.
    pub fn priority_cmp(&self, other: &Turn) -> Ordering {
        self.is_single()
            .cmp(&other.is_single())
            .reverse()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.second {
            Some(second) => write!(f, "{} {}", self.first, second),
            None => write!(f, "{}", self.first),
        }
    }
}
