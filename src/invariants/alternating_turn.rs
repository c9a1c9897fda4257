//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::Mark;

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... with X first. While the game is
/// in progress the stored current mark agrees with history parity; once
/// the game has ended it stays frozen at the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        // First move is always X
        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].mark == window[1].mark {
                return false;
            }
        }

        if session.status().is_terminal() {
            // Frozen at whoever moved last
            match history.last() {
                Some(last) => session.current == last.mark,
                None => false,
            }
        } else {
            // Parity decides who moves next
            let expected_next = if history.len() % 2 == 0 {
                Mark::X
            } else {
                Mark::O
            };
            session.current == expected_next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new();
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_single_move_holds() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();

        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.current_player().mark(), &Mark::O);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = GameSession::new();
        for index in [0, 4, 2, 6, 7] {
            session.play_turn(index).unwrap();
        }

        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.current_player().mark(), &Mark::O);
    }

    #[test]
    fn test_won_game_frozen_at_winner_holds() {
        let mut session = GameSession::new();
        // X takes the top row
        for index in [0, 3, 1, 4, 2] {
            session.play_turn(index).unwrap();
        }

        assert!(session.status().is_terminal());
        assert_eq!(session.current_player().mark(), &Mark::X);
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_turn_pointer_violates() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();

        // One move in, O is expected next
        session.current = Mark::X;

        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
