//! Strictly Timeline - tic-tac-toe with move history
//!
//! Pure game logic: board snapshots, win and draw rules, and a history of
//! snapshots with a cursor that can travel back to any earlier move and
//! branch from there.
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameHistory, Position};
//!
//! let mut history = GameHistory::new();
//! history.play(Position::Center);
//! history.play(Position::TopLeft);
//! assert_eq!(history.status().to_string(), "Next player: X");
//!
//! history.jump_to(1).unwrap();
//! history.play(Position::BottomRight);
//! assert_eq!(history.history_len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{HistoryError, PlayOutcome};
pub use history::{GameHistory, HistoryEntry};
pub use position::Position;
pub use rules::{WinLine, detect_win};
pub use status::{GameStatus, MoveEntry, MoveLabel};
pub use types::{Board, Player, Square};
