//! Application state and logic.

use crossterm::event::KeyCode;
use tracing::debug;
use vacvoe::{GameHistory, GameStatus, Position};

use crate::input;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board grid.
    Board,
    /// The move-history list.
    History,
}

/// Main application state.
///
/// Owns the one [`GameHistory`] instance for the running game; the
/// UI reads it back after every key press. Nothing here is a second
/// copy of game state - cursor, focus and list selection are purely
/// view concerns.
pub struct App {
    history: GameHistory,
    cursor: Position,
    focus: Focus,
    selected_entry: usize,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_entry: 0,
            notice: None,
        }
    }

    /// Gets the game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected history entry.
    pub fn selected_entry(&self) -> usize {
        self.selected_entry
    }

    /// Gets the transient notice for the last rejected move, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Status line text, derived fresh from the state machine.
    pub fn status_line(&self) -> String {
        match self.history.status() {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw: board is full".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.history.to_move()),
        }
    }

    /// Handles a key press. Returns true when the app should exit.
    pub fn on_key(&mut self, key: KeyCode) -> bool {
        self.notice = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits address squares directly, regardless of focus.
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::History => {
                self.move_selection(key);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }

        false
    }

    fn play(&mut self, pos: Position) {
        debug!(%pos, "playing move");

        // `play` ignores invalid moves silently; ask `check_play`
        // first so the status line can say why nothing happened.
        if let Err(reason) = self.history.check_play(pos) {
            self.notice = Some(reason.to_string());
            return;
        }

        self.history.play(pos);
        self.selected_entry = self.history.current_index();
    }

    fn jump_to_selected(&mut self) {
        debug!(index = self.selected_entry, "jumping to snapshot");
        self.history.jump_to(self.selected_entry);
    }

    fn move_selection(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected_entry = self.selected_entry.saturating_sub(1),
            KeyCode::Down => {
                self.selected_entry = (self.selected_entry + 1).min(self.history.len() - 1);
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
    }

    fn restart(&mut self) {
        debug!("restarting game");
        self.history = GameHistory::new();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected_entry = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
