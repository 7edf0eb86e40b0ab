//! First-class invariants for the history state machine.
//!
//! Invariants are logical properties that must hold across every
//! transition. They are testable independently and serve as
//! documentation of what the history guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with the list
    /// of violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_in_range;
pub mod mark_progression;
pub mod root_empty;

pub use cursor_in_range::CursorInRangeInvariant;
pub use mark_progression::MarkProgressionInvariant;
pub use root_empty::RootEmptyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    RootEmptyInvariant,
    CursorInRangeInvariant,
    MarkProgressionInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameHistory, Position};

    #[test]
    fn test_invariant_set_holds_for_fresh_history() {
        let history = GameHistory::new();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut history = GameHistory::new();
        history.play(Position::TopLeft);
        history.play(Position::Center);
        history.play(Position::BottomRight);
        history.jump_to(1);
        history.play(Position::TopRight);

        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let history = GameHistory::new();

        type TwoInvariants = (RootEmptyInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&history).is_ok());
    }
}
