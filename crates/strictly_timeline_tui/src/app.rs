//! Application state and logic.
//!
//! [`App`] is the single owner of the game history. Every input event goes
//! through it one at a time, so history updates never interleave.

use crate::config::TimelineConfig;
use crate::input::{digit_position, move_cursor};
use crate::moves::{SortOrder, describe};
use crossterm::event::KeyCode;
use strictly_timeline::{GameHistory, HistoryError, MoveEntry, PlayOutcome, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Arrow keys move over the move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    sort_order: SortOrder,
    focus: Focus,
    board_cursor: Position,
    /// Row of the move list under the selection, in display order.
    selected_row: usize,
    highlight_winner: bool,
    message: Option<String>,
}

impl App {
    /// Creates a new application at game start.
    #[instrument(skip(config))]
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            history: GameHistory::new(),
            sort_order: *config.move_order(),
            focus: Focus::default(),
            board_cursor: Position::Center,
            selected_row: 0,
            highlight_winner: *config.highlight_winner(),
            message: None,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Square under the board cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Selected row of the move list, in display order.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Whether the winning line should be highlighted.
    pub fn highlight_winner(&self) -> bool {
        self.highlight_winner
    }

    /// Feedback from the last rejected action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Move list entries in display order.
    pub fn move_rows(&self) -> Vec<MoveEntry> {
        self.sort_order.arrange(self.history.moves().collect())
    }

    /// Move list text in display order.
    pub fn move_descriptions(&self) -> Vec<String> {
        self.move_rows().iter().map(describe).collect()
    }

    /// Cell clicked: play there.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, pos: Position) -> PlayOutcome {
        let outcome = self.history.play(pos);
        if outcome.is_placed() {
            info!(%outcome, "Move played");
            self.message = None;
            self.board_cursor = pos;
            self.select_current_row();
        } else {
            debug!(%outcome, "Move rejected");
            self.message = Some(outcome.to_string());
        }
        outcome
    }

    /// History entry selected: jump to it.
    #[instrument(skip(self))]
    pub fn select_move(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index).inspect_err(|e| {
            warn!(error = %e, "Jump rejected");
        })?;
        self.message = None;
        self.select_current_row();
        Ok(())
    }

    /// Flips the move list order. The history is not touched.
    #[instrument(skip(self), fields(from = ?self.sort_order))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        self.select_current_row();
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if let Some(pos) = digit_position(key) {
            self.select_cell(pos);
            return Control::Continue;
        }
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.toggle_sort(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_cell(self.board_cursor);
            }
            _ => self.board_cursor = move_cursor(self.board_cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last_row = self.history.history_len() - 1;
        match key {
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(last_row),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.move_rows().get(self.selected_row) {
                    let index = entry.index;
                    if let Err(e) = self.select_move(index) {
                        debug!(error = %e, "Move list jump failed");
                    }
                }
            }
            _ => {}
        }
    }

    fn select_current_row(&mut self) {
        let current = self.history.current_move();
        self.selected_row = self
            .move_rows()
            .iter()
            .position(|entry| entry.index == current)
            .unwrap_or(0);
    }
}
