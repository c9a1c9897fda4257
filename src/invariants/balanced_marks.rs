//! Balanced marks invariant: X and O counts differ by at most one.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Mark;

/// Invariant: mark counts stay balanced.
///
/// With strict alternation the mover counts can never drift apart by more
/// than a single mark.
pub struct BalancedMarksInvariant;

impl Invariant<GameSession> for BalancedMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let x_count = session.board().count(Mark::X);
        let o_count = session.board().count(Mark::O);

        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
