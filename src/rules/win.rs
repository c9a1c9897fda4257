//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning triples in row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Checks whether the given mark holds a complete winning triple.
///
/// This is the per-move check: only the player who just moved can have
/// newly completed a line, so eight constant-size lookups suffice.
#[instrument]
pub fn wins(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == Cell::Occupied(mark)))
}

/// Scans the whole board for a winner.
///
/// Returns `Some(mark)` if either mark holds three in a row, `None`
/// otherwise. Used for board analysis; the turn controller uses the
/// cheaper [`wins`] check instead.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();

    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return cell.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!wins(&board, Mark::X));
        assert!(!wins(&board, Mark::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board.place_mark(index, Mark::X).unwrap();
        }
        assert_eq!(winner(&board), Some(Mark::X));
        assert!(wins(&board, Mark::X));
        assert!(!wins(&board, Mark::O));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for index in [1, 4, 7] {
            board.place_mark(index, Mark::O).unwrap();
        }
        assert_eq!(winner(&board), Some(Mark::O));
        assert!(wins(&board, Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for index in [0, 4, 8] {
            board.place_mark(index, Mark::O).unwrap();
        }
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place_mark(0, Mark::X).unwrap();
        board.place_mark(1, Mark::X).unwrap();
        assert_eq!(winner(&board), None);
        assert!(!wins(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place_mark(0, Mark::X).unwrap();
        board.place_mark(1, Mark::O).unwrap();
        board.place_mark(2, Mark::X).unwrap();
        assert_eq!(winner(&board), None);
    }
}
