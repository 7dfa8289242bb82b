//! Start invariant: history begins at the empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: entry 0 is the empty board and records no move.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .first()
            .is_some_and(|entry| *entry.snapshot() == Board::new() && entry.position().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
