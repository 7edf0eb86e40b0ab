//! Snapshot history and time travel for tic-tac-toe.
//!
//! The game is a sequence of board snapshots plus a cursor into that
//! sequence. Whose turn it is falls out of the cursor's parity, and
//! game-over falls out of evaluating the current snapshot - neither
//! is stored.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use crate::Position;

/// Reason a move cannot be played on the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game on the current snapshot is already won.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

/// Linear history of board snapshots with a movable cursor.
///
/// The first snapshot is always the empty board. Playing a move
/// appends a snapshot; playing after jumping back to an earlier
/// snapshot discards everything after the cursor first, so history
/// stays a single line - there is no branch tree and no redo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    /// Board snapshots from game start to the latest move.
    pub(crate) snapshots: Vec<Board>,
    /// Index of the snapshot currently displayed.
    pub(crate) current: usize,
}

impl GameHistory {
    /// Creates a fresh history: one empty board, cursor on it.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Returns the snapshot the cursor points at.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Returns the cursor index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no snapshots are recorded.
    ///
    /// Always false in practice: the root snapshot is never discarded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns all recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns true if X moves next from the current snapshot.
    ///
    /// X moves on even cursor indices, O on odd ones.
    pub fn is_x_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// Returns the player who moves next from the current snapshot.
    pub fn to_move(&self) -> Player {
        if self.is_x_next() {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Returns the derived status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.current_board().is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the unoccupied positions on the current snapshot.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.current_board())
    }

    /// Checks whether a move could be played on the current snapshot.
    ///
    /// This is the precondition `play` consults. It is public so a
    /// frontend can tell the user why a click did nothing; `play`
    /// itself never surfaces the reason.
    pub fn check_play(&self, pos: Position) -> Result<(), MoveError> {
        if !self.current_board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        if let Some(winner) = self.winner() {
            return Err(MoveError::GameOver(winner));
        }
        Ok(())
    }

    /// Plays a move at the given position for the parity-derived player.
    ///
    /// Invalid moves (occupied square, or game already won) are ignored
    /// without an error: the history and cursor are left untouched.
    ///
    /// A valid move clones the current snapshot, marks it, truncates
    /// any snapshots recorded after the cursor, appends the new board,
    /// and moves the cursor onto it.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) {
        if let Err(reason) = self.check_play(pos) {
            debug!(%reason, "ignoring move");
            return;
        }

        let mut board = self.current_board().clone();
        board.set(pos, Square::Occupied(self.to_move()));

        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board);
        self.current = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    /// Moves the cursor to a recorded snapshot without altering history.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not name a recorded snapshot. Callers are
    /// expected to only offer indices from `0..len()`; anything else is
    /// a contract violation, not a recoverable condition.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "history index {} out of range ({} snapshots recorded)",
            index,
            self.snapshots.len()
        );
        self.current = index;
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{HistoryInvariants, InvariantSet};

        if let Err(violations) = HistoryInvariants::check_all(self) {
            panic!("history invariants violated after transition: {:?}", violations);
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert!(history.is_x_next());
        assert_eq!(history.to_move(), Player::X);
        assert_eq!(history.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_parity_tracks_cursor() {
        let mut history = GameHistory::new();
        history.play(Position::TopLeft);
        assert_eq!(history.to_move(), Player::O);
        history.play(Position::Center);
        assert_eq!(history.to_move(), Player::X);

        // Jumping back rewinds the turn as well.
        history.jump_to(1);
        assert_eq!(history.to_move(), Player::O);
        history.jump_to(0);
        assert_eq!(history.to_move(), Player::X);
    }

    #[test]
    fn test_check_play_reports_occupied() {
        let mut history = GameHistory::new();
        history.play(Position::Center);
        assert_eq!(
            history.check_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(history.check_play(Position::TopLeft), Ok(()));
    }

    #[test]
    fn test_check_play_reports_game_over() {
        let mut history = GameHistory::new();
        // X takes the top row: 0, 3, 1, 4, 2
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            history.play(pos);
        }
        assert_eq!(history.winner(), Some(Player::X));
        assert_eq!(
            history.check_play(Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_to_out_of_range_panics() {
        let mut history = GameHistory::new();
        history.jump_to(1);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(GameHistory::default(), GameHistory::new());
    }
}
