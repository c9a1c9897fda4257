//! Formal verification of board properties using the Kani model checker.
//!
//! These proof harnesses mathematically verify that the placement rules
//! hold for ALL possible boards (bounded).

#[cfg(kani)]
mod proofs {
    use crate::rules;
    use crate::types::{Board, Cell, Mark};

    /// Verify that placement never overwrites an occupied cell.
    ///
    /// Proves: cells only transition Empty -> Occupied, never reverse.
    #[kani::proof]
    fn verify_place_mark_never_overwrites() {
        let mut board: Board = kani::any();
        let mark: Mark = kani::any();
        let index: usize = kani::any();
        kani::assume(index < 9);

        let before = board.cells();
        let placed = board.place_mark(index, mark);

        match placed {
            Ok(true) => {
                // Target was empty and now holds exactly this mark
                assert!(before[index] == Cell::Empty);
                assert!(board.get(index) == Some(Cell::Occupied(mark)));
            }
            Ok(false) => {
                // Occupied target is untouched
                assert!(before[index] != Cell::Empty);
                assert!(board.cells() == before);
            }
            Err(_) => unreachable!(),
        }
    }

    /// Verify that an out-of-range index is rejected without side effects.
    #[kani::proof]
    fn verify_out_of_range_rejected() {
        let mut board: Board = kani::any();
        let mark: Mark = kani::any();
        let index: usize = kani::any();
        kani::assume(index >= 9);

        let before = board.cells();
        let placed = board.place_mark(index, mark);

        assert!(placed.is_err());
        assert!(board.cells() == before);
    }

    /// Verify that a win requires at least three of the winning mark.
    #[kani::proof]
    fn verify_win_needs_three_marks() {
        let board: Board = kani::any();
        let mark: Mark = kani::any();

        if rules::wins(&board, mark) {
            assert!(board.count(mark) >= 3);
        }
    }
}
