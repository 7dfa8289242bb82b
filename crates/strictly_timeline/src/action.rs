//! Outcomes and errors of history operations.
//!
//! A rejected move is not an error: clicking an occupied square or playing
//! after the game is decided simply has no effect. [`PlayOutcome`] reports
//! what happened so callers can log it, and may be ignored.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// Result of a call to [`GameHistory::play`](crate::GameHistory::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum PlayOutcome {
    /// The mark was placed and the cursor advanced.
    #[display("{player} played {position}")]
    Placed {
        /// The player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },

    /// The square was already occupied; nothing changed.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),

    /// The current snapshot already has a winner; nothing changed.
    #[display("Game is already over")]
    GameOver,
}

impl PlayOutcome {
    /// Whether the move changed the history.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// Error raised by history operations given out-of-contract input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Jump target is not an existing history index.
    #[display("Move #{requested} does not exist (history has {len} entries)")]
    MoveOutOfRange {
        /// The requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Raw board index outside 0-8.
    #[display("Position {index} out of bounds (must be 0-8)")]
    PositionOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        let placed = PlayOutcome::Placed {
            player: Player::O,
            position: Position::Center,
        };
        assert_eq!(placed.to_string(), "O played Center");
        assert!(placed.is_placed());
        assert_eq!(
            PlayOutcome::Occupied(Position::TopLeft).to_string(),
            "Square Top-left is already occupied"
        );
        assert!(!PlayOutcome::GameOver.is_placed());
    }

    #[test]
    fn test_error_messages() {
        let err = HistoryError::MoveOutOfRange {
            requested: 5,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Move #5 does not exist (history has 3 entries)"
        );
        assert_eq!(
            HistoryError::PositionOutOfRange { index: 9 }.to_string(),
            "Position 9 out of bounds (must be 0-8)"
        );
    }
}
