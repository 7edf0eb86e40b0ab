//! Mark progression invariant: snapshots grow one alternating mark at a time.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::{Player, Square};
use crate::Position;

/// Invariant: Consecutive snapshots differ by exactly one new mark.
///
/// For every adjacent pair, exactly one square goes from empty to
/// occupied and every other square is unchanged. The new mark belongs
/// to X after an even number of moves, O after an odd number, so the
/// whole history reads as an alternating replay from the empty board.
pub struct MarkProgressionInvariant;

impl Invariant<GameHistory> for MarkProgressionInvariant {
    fn holds(history: &GameHistory) -> bool {
        for (step, pair) in history.snapshots().windows(2).enumerate() {
            let expected = if step % 2 == 0 { Player::X } else { Player::O };
            let mut new_marks = 0;

            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (Square::Empty, Square::Occupied(player)) => {
                        if player != expected {
                            return false;
                        }
                        new_marks += 1;
                    }
                    (before, after) if before == after => {}
                    // A square reverted or flipped owners.
                    _ => return false,
                }
            }

            if new_marks != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by one alternating mark"
    }
}
