//! Cursor invariant: the cursor always points at an existing snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `current_move() < history_len()`.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_move() < history.history_len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
