//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot of the current line of play and
//! a cursor pointing at the one being shown. Playing from an earlier
//! snapshot discards everything after the cursor before appending, so the
//! abandoned future is gone for good.

use crate::action::{HistoryError, PlayOutcome};
use crate::invariants::assert_invariants;
use crate::rules::{WinLine, detect_win, is_draw};
use crate::status::{GameStatus, MoveEntry, MoveLabel};
use crate::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One snapshot and the move that produced it.
///
/// The start entry has no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    snapshot: Board,
    position: Option<Position>,
}

impl HistoryEntry {
    fn start() -> Self {
        Self {
            snapshot: Board::new(),
            position: None,
        }
    }

    /// The board after this entry's move.
    pub fn snapshot(&self) -> &Board {
        &self.snapshot
    }

    /// The square filled to reach this snapshot.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Linear game history plus a cursor into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty start board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
            cursor: 0,
        }
    }

    /// Builds a history by playing `positions` in order from the start.
    ///
    /// Rejected moves are skipped the same way [`play`](Self::play) skips them.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut history = Self::new();
        for pos in positions {
            history.play(pos);
        }
        history
    }

    /// Number of snapshots, including the start board. Never zero.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Index of the snapshot under the cursor.
    pub fn current_move(&self) -> usize {
        self.cursor
    }

    /// All entries of the current line of play.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The snapshot at `index`, if it exists.
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.entries.get(index).map(HistoryEntry::snapshot)
    }

    /// The square filled to produce snapshot `index`.
    ///
    /// `None` for the start entry and for indices past the end.
    pub fn position(&self, index: usize) -> Option<Position> {
        self.entries.get(index).and_then(HistoryEntry::position)
    }

    /// The snapshot under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.entries[self.cursor].snapshot
    }

    /// Whether X moves next at the cursor.
    pub fn is_x_next(&self) -> bool {
        self.cursor % 2 == 0
    }

    /// The player who moves next at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.cursor)
    }

    /// The completed line on the current snapshot, if any.
    pub fn winner(&self) -> Option<WinLine> {
        detect_win(self.current_board())
    }

    /// Whether the current snapshot is full with no completed line.
    pub fn is_draw(&self) -> bool {
        is_draw(self.current_board())
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = detect_win(board)
            && let Square::Occupied(player) = board.get(line.first())
        {
            GameStatus::Won { player, line }
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Does nothing if the current snapshot already has a winner or the
    /// square is occupied. Otherwise everything after the cursor is
    /// dropped, the new snapshot is appended and the cursor moves onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> PlayOutcome {
        if self.winner().is_some() {
            debug!("Move ignored, game already decided");
            return PlayOutcome::GameOver;
        }
        if !self.current_board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return PlayOutcome::Occupied(pos);
        }

        let player = self.to_move();
        let next = self
            .current_board()
            .with(pos, Square::Occupied(player));

        let discarded = self.entries.len() - (self.cursor + 1);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            snapshot: next,
            position: Some(pos),
        });
        self.cursor = self.entries.len() - 1;

        if discarded > 0 {
            info!(discarded, "Branched history, later moves discarded");
        }
        debug!(cursor = self.cursor, "Move applied");

        assert_invariants(self);

        PlayOutcome::Placed {
            player,
            position: pos,
        }
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PositionOutOfRange`] for indices of 9 or more.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<PlayOutcome, HistoryError> {
        let pos =
            Position::from_index(index).ok_or(HistoryError::PositionOutOfRange { index })?;
        Ok(self.play(pos))
    }

    /// Moves the cursor to an existing snapshot. History is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `index` is not an
    /// existing entry; the cursor does not move.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: index,
                len: self.entries.len(),
            });
        }
        self.cursor = index;
        debug!("Cursor moved");
        Ok(())
    }

    /// Label for the entry at `index`.
    pub fn move_label(&self, index: usize) -> Option<MoveLabel> {
        let entry = self.entries.get(index)?;
        Some(match entry.position {
            Some(pos) => MoveLabel::from(pos),
            None => MoveLabel::GameStart,
        })
    }

    /// The move list in chronological order.
    pub fn moves(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        self.entries.iter().enumerate().map(|(index, entry)| MoveEntry {
            index,
            label: entry
                .position
                .map_or(MoveLabel::GameStart, MoveLabel::from),
            is_current: index == self.cursor,
        })
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl HistoryEntry {
    /// Builds an entry without any consistency checks.
    pub(crate) fn raw(snapshot: Board, position: Option<Position>) -> Self {
        Self { snapshot, position }
    }
}

#[cfg(test)]
impl GameHistory {
    /// Builds a history from parts without any consistency checks.
    pub(crate) fn from_raw(entries: Vec<HistoryEntry>, cursor: usize) -> Self {
        Self { entries, cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position::*;

    #[test]
    fn test_new_history_starts_empty() {
        let history = GameHistory::new();
        assert_eq!(history.history_len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.position(0), None);
        assert!(history.is_x_next());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut history = GameHistory::new();
        let outcome = history.play(Center);
        assert_eq!(
            outcome,
            PlayOutcome::Placed {
                player: Player::X,
                position: Center
            }
        );
        assert_eq!(history.history_len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.position(1), Some(Center));
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut history = GameHistory::replay([Center]);
        let before = history.clone();
        assert_eq!(history.play(Center), PlayOutcome::Occupied(Center));
        assert_eq!(history, before);
    }

    #[test]
    fn test_branch_discards_future() {
        let mut history = GameHistory::replay([TopLeft, Center, TopRight, BottomLeft]);
        history.jump_to(1).unwrap();
        history.play(BottomRight);
        assert_eq!(history.history_len(), 3);
        assert_eq!(history.current_move(), 2);
        assert_eq!(history.position(2), Some(BottomRight));
        assert_eq!(history.position(3), None);
        // O moved at index 2 because the cursor was odd.
        assert_eq!(
            history.current_board().get(BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_out_of_range_leaves_cursor() {
        let mut history = GameHistory::replay([TopLeft, Center]);
        let err = history.jump_to(3).unwrap_err();
        assert_eq!(
            err,
            HistoryError::MoveOutOfRange {
                requested: 3,
                len: 3
            }
        );
        assert_eq!(history.current_move(), 2);
    }

    #[test]
    fn test_move_labels() {
        let history = GameHistory::replay([MiddleRight, BottomLeft]);
        assert_eq!(history.move_label(0), Some(MoveLabel::GameStart));
        assert_eq!(
            history.move_label(1),
            Some(MoveLabel::PlayedAt { row: 1, col: 2 })
        );
        assert_eq!(
            history.move_label(2),
            Some(MoveLabel::PlayedAt { row: 2, col: 0 })
        );
        assert_eq!(history.move_label(3), None);
    }

    #[test]
    fn test_moves_marks_current() {
        let mut history = GameHistory::replay([TopLeft, Center, TopRight]);
        history.jump_to(1).unwrap();
        let current: Vec<usize> = history
            .moves()
            .filter(|m| m.is_current)
            .map(|m| m.index)
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(history.moves().count(), 4);
    }

    #[test]
    fn test_play_index_rejects_out_of_bounds() {
        let mut history = GameHistory::new();
        assert_eq!(
            history.play_index(9),
            Err(HistoryError::PositionOutOfRange { index: 9 })
        );
        assert_eq!(history.history_len(), 1);
        assert!(history.play_index(4).unwrap().is_placed());
    }
}
