//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Board;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to a mark, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        // Reconstruct the board from history
        let mut reconstructed = Board::new();

        for mov in session.history() {
            // Every recorded move must land on an empty, in-range cell
            match reconstructed.place_mark(mov.index, mov.mark) {
                Ok(true) => {}
                Ok(false) | Err(_) => return false,
            }
        }

        // Reconstructed board must match the current board
        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new();
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_single_move_holds() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut session = GameSession::new();
        for index in [0, 4, 2, 6, 7] {
            session.play_turn(index).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut session = GameSession::new();
        session.play_turn(4).unwrap();

        // Flip the occupied cell to the other mark behind the session's back
        let mut cells = [Cell::Empty; 9];
        cells[4] = Cell::Occupied(Mark::O);
        session.board = Board::from_cells(cells);

        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
