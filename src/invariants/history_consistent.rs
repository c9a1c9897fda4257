//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: history length equals the number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
/// No moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let history_len = session.history().len();

        let occupied_count = session
            .board()
            .cells()
            .iter()
            .filter(|cell| !cell.is_empty())
            .count();

        history_len == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::Move;
    use crate::types::Mark;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new();
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_single_move_holds() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();

        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_rejected_move_leaves_history_alone() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();
        session.play_turn(4).unwrap();

        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_full_game_holds() {
        let mut session = GameSession::new();
        for index in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
            session.play_turn(index).unwrap();
        }

        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 9);
    }

    #[test]
    fn test_phantom_history_entry_violates() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();

        // A history entry with no matching mark on the board
        session.history.push(Move::new(Mark::O, 0));

        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
