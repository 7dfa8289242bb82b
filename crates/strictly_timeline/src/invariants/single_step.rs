//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameHistory, Player, Position, Square};

/// Invariant: every entry is its predecessor plus one mark.
///
/// For entry `m`, exactly one square changed from the previous snapshot,
/// it went from empty to the mark of the player owning move `m - 1`
/// (X first), and it is the position recorded on the entry.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let (before, after) = (pair[0].snapshot(), pair[1].snapshot());
                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();
                let expected = Square::Occupied(Player::for_move(index));

                match (changed.as_slice(), pair[1].position()) {
                    ([pos], Some(recorded)) => {
                        *pos == recorded
                            && before.get(*pos) == Square::Empty
                            && after.get(*pos) == expected
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one alternating mark at its recorded position"
    }
}
