//! Move list presentation: ordering and entry descriptions.
//!
//! Sort order is a display preference only. It never touches the game
//! history, which stays in chronological order.

use serde::{Deserialize, Serialize};
use strictly_timeline::{MoveEntry, MoveLabel};
use tracing::instrument;

/// Order in which the move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the toggle button, naming the order it switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }

    /// Arranges chronological entries in this order.
    pub fn arrange(self, mut entries: Vec<MoveEntry>) -> Vec<MoveEntry> {
        if self == Self::Descending {
            entries.reverse();
        }
        entries
    }
}

/// Text for one row of the move list.
///
/// The current entry reads as a position marker; every other entry reads
/// as a jump target.
pub fn describe(entry: &MoveEntry) -> String {
    match (entry.is_current, entry.label) {
        (false, MoveLabel::GameStart) => "Go to game start".to_string(),
        (false, label) => format!("Go to move #{}. Played at {}", entry.index, label),
        (true, MoveLabel::GameStart) => format!("You are at move #{}", entry.index),
        (true, label) => format!("You are at move #{}. Played at {}", entry.index, label),
    }
}
