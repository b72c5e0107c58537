//! Move ordering for alpha-beta pruning
//!
//! Turns are tried in this order:
//! 1. The best turn recorded in the transposition table
//! 2. Killer turns for the current depth, most recent first
//! 3. Remaining turns, one-move turns before two-move turns
//!
//! Ordering only affects how early cutoffs happen, never the result.

use crate::board::Turn;

/// Depths tracked by the killer table
pub const MAX_KILLER_DEPTH: usize = 64;

/// Two killer slots per remaining search depth.
///
/// Slot 0 holds the most recent cutoff turn.
pub struct KillerMoves {
    turns: Vec<[Option<Turn>; 2]>,
}

impl KillerMoves {
    pub fn new() -> Self {
        Self {
            turns: vec![[None, None]; MAX_KILLER_DEPTH],
        }
    }

    /// Record a turn that caused a cutoff at `depth`.
    pub fn add(&mut self, turn: Turn, depth: usize) {
        if depth < MAX_KILLER_DEPTH && self.turns[depth][0] != Some(turn) {
            self.turns[depth][1] = self.turns[depth][0];
            self.turns[depth][0] = Some(turn);
        }
    }

    /// Killer slots for `depth`, most recent first
    pub fn get(&self, depth: usize) -> [Option<Turn>; 2] {
        self.turns.get(depth).copied().unwrap_or([None, None])
    }

    pub fn clear(&mut self) {
        self.turns.fill([None, None]);
    }
}

impl Default for KillerMoves {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `turn` to the front if the list contains it.
fn promote(turns: &mut Vec<Turn>, turn: &Turn) -> bool {
    match turns.iter().position(|t| t == turn) {
        Some(idx) => {
            let found = turns.remove(idx);
            turns.insert(0, found);
            true
        }
        None => false,
    }
}

/// Order the legal turns of one node in place.
pub fn order_turns(turns: &mut Vec<Turn>, killers: [Option<Turn>; 2], tt_turn: Option<&Turn>) {
    // Stable: generation order survives inside each class
    turns.sort_by(Turn::priority_cmp);

    for killer in killers.iter().rev().flatten() {
        promote(turns, killer);
    }

    if let Some(turn) = tt_turn {
        promote(turns, turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Move, Piece, Pos};

    fn fleet(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(
            Pos::new(from.0, from.1),
            Pos::new(to.0, to.1),
            Piece::Fleetship(Color::Gold),
            None,
            false,
        )
    }

    fn flag(to: (u8, u8)) -> Turn {
        Turn::single(Move::new(
            Pos::new(5, 5),
            Pos::new(to.0, to.1),
            Piece::Flagship,
            None,
            true,
        ))
    }

    fn double(n: u8) -> Turn {
        Turn::double(fleet((1, n), (2, n)), fleet((8, n), (9, n)))
    }

    #[test]
    fn test_singles_first_stable() {
        let mut turns = vec![double(0), flag((4, 5)), double(1), flag((6, 5))];
        order_turns(&mut turns, [None, None], None);
        assert_eq!(turns, vec![flag((4, 5)), flag((6, 5)), double(0), double(1)]);
    }

    #[test]
    fn test_killers_most_recent_first() {
        let mut turns = vec![flag((4, 5)), double(0), double(1), double(2)];
        order_turns(&mut turns, [Some(double(2)), Some(double(1))], None);
        assert_eq!(turns[0], double(2));
        assert_eq!(turns[1], double(1));
        assert_eq!(turns[2], flag((4, 5)));
    }

    #[test]
    fn test_tt_turn_goes_first() {
        let mut turns = vec![flag((4, 5)), double(0), double(1)];
        let tt = double(1);
        order_turns(&mut turns, [Some(double(0)), None], Some(&tt));
        assert_eq!(turns[0], double(1));
        assert_eq!(turns[1], double(0));
        assert_eq!(turns.len(), 3);
    }

    #[test]
    fn test_absent_killer_ignored() {
        let mut turns = vec![double(0), double(1)];
        order_turns(&mut turns, [Some(double(7)), None], Some(&flag((0, 5))));
        assert_eq!(turns, vec![double(0), double(1)]);
    }

    #[test]
    fn test_killer_table_slots() {
        let mut killers = KillerMoves::new();
        killers.add(double(0), 3);
        killers.add(double(1), 3);
        killers.add(double(1), 3);

        assert_eq!(killers.get(3), [Some(double(1)), Some(double(0))]);
        assert_eq!(killers.get(2), [None, None]);

        killers.add(double(2), MAX_KILLER_DEPTH);
        assert_eq!(killers.get(MAX_KILLER_DEPTH), [None, None]);

        killers.clear();
        assert_eq!(killers.get(3), [None, None]);
    }
}
