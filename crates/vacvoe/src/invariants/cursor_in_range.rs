//! Cursor invariant: the displayed snapshot is always a recorded one.

use super::Invariant;
use crate::history::GameHistory;

/// Invariant: The cursor indexes a recorded snapshot.
///
/// `play` moves the cursor onto the snapshot it just appended and
/// `jump_to` rejects out-of-range indices, so the cursor can never
/// dangle past the end of the history.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_index() < history.len()
    }

    fn description() -> &'static str {
        "Cursor indexes a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fresh_history_holds() {
        assert!(CursorInRangeInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_holds_after_jump_and_play() {
        let mut history = GameHistory::new();
        history.play(Position::TopLeft);
        history.play(Position::Center);
        history.jump_to(0);
        history.play(Position::BottomRight);
        assert!(CursorInRangeInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut history = GameHistory::new();
        history.current = 5;
        assert!(!CursorInRangeInvariant::holds(&history));
    }
}
