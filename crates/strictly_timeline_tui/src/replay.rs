//! Non-interactive replay of a move sequence.

use crate::moves::{SortOrder, describe};
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_timeline::{Board, GameHistory, GameStatus, MoveEntry};
use tracing::{instrument, warn};

/// Snapshot of a replayed game, as printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    /// Status of the snapshot under the cursor.
    pub status: GameStatus,
    /// Status line text.
    pub status_text: String,
    /// Cursor position.
    pub current_move: usize,
    /// Board under the cursor.
    pub board: Board,
    /// Move list in chronological order.
    pub moves: Vec<MoveEntry>,
}

impl ReplaySummary {
    /// Captures the current state of `history`.
    pub fn from_history(history: &GameHistory) -> Self {
        let status = history.status();
        Self {
            status,
            status_text: status.to_string(),
            current_move: history.current_move(),
            board: *history.current_board(),
            moves: history.moves().collect(),
        }
    }
}

/// Plays `cells` (0-8) in order, then jumps to `jump` if given.
///
/// Rejected moves are skipped, as a click would be.
///
/// # Errors
///
/// Fails on a cell of 9 or more, or a jump target outside the history.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>) -> Result<GameHistory> {
    let mut history = GameHistory::new();
    for (step, &cell) in cells.iter().enumerate() {
        let outcome = history
            .play_index(cell)
            .with_context(|| format!("Invalid cell at step {}", step + 1))?;
        if !outcome.is_placed() {
            warn!(step = step + 1, %outcome, "Move skipped");
        }
    }
    if let Some(target) = jump {
        history
            .jump_to(target)
            .with_context(|| format!("Cannot jump to move #{}", target))?;
    }
    Ok(history)
}

/// Plain-text report: board, status line and move list.
pub fn render_text(history: &GameHistory, order: SortOrder) -> String {
    let mut out = String::new();
    out.push_str(&history.current_board().display());
    out.push_str("\n\n");
    out.push_str(&history.status().to_string());
    out.push_str("\n\nMoves:\n");
    for entry in order.arrange(history.moves().collect()) {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, describe(&entry)));
    }
    out
}

/// JSON report of the replayed game.
pub fn render_json(history: &GameHistory) -> Result<String> {
    serde_json::to_string_pretty(&ReplaySummary::from_history(history))
        .context("Failed to serialize replay summary")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_rejects_out_of_range_cell() {
        let err = replay(&[0, 9], None).unwrap_err();
        assert!(err.to_string().contains("step 2"));
    }

    #[test]
    fn test_replay_skips_occupied() {
        let history = replay(&[4, 4, 0], None).unwrap();
        assert_eq!(history.history_len(), 3);
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        assert!(replay(&[4], Some(2)).is_err());
        assert_eq!(replay(&[4], Some(0)).unwrap().current_move(), 0);
    }

    #[test]
    fn test_render_text() {
        let history = replay(&[0, 3, 1, 4, 2], Some(5)).unwrap();
        let text = render_text(&history, SortOrder::Ascending);
        assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6"));
        assert!(text.contains("\nWinner: X\n"));
        assert!(text.contains("  Go to game start\n"));
        assert!(text.contains("> You are at move #5. Played at (0, 2)\n"));
    }

    #[test]
    fn test_render_text_descending() {
        let history = replay(&[4, 0], None).unwrap();
        let text = render_text(&history, SortOrder::Descending);
        let moves: Vec<&str> = text.lines().skip_while(|l| *l != "Moves:").skip(1).collect();
        assert_eq!(
            moves,
            vec![
                "> You are at move #2. Played at (0, 0)",
                "  Go to move #1. Played at (1, 1)",
                "  Go to game start",
            ]
        );
    }
}
