//! Derived game status and move labels.

use crate::rules::WinLine;
use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// Status of the snapshot under the cursor.
///
/// The `Display` form is the status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet and empty squares remain.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },

    /// A line is complete.
    #[display("Winner: {player}")]
    Won {
        /// Mark on the first square of the line.
        player: Player,
        /// The completed line.
        line: WinLine,
    },

    /// Board full, no line.
    #[display("Result: Draw")]
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Whether further moves at this snapshot are pointless.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Short description of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveLabel {
    /// Entry 0, the empty board.
    #[display("game start")]
    GameStart,

    /// A move, by zero-based row and column of the filled square.
    #[display("({row}, {col})")]
    PlayedAt {
        /// Row of the filled square.
        row: usize,
        /// Column of the filled square.
        col: usize,
    },
}

impl From<Position> for MoveLabel {
    fn from(pos: Position) -> Self {
        MoveLabel::PlayedAt {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

/// One row of the move list as a renderer needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index.
    pub index: usize,
    /// Label for the entry.
    pub label: MoveLabel,
    /// Whether the cursor is on this entry.
    pub is_current: bool,
}
