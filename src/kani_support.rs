//! Kani arbitrary implementations for the core types.
//!
//! These implementations allow Kani to explore all possible values of our
//! types during model checking.

#[cfg(kani)]
use crate::turn::Move;
#[cfg(kani)]
use crate::types::{Board, Cell, Mark};

#[cfg(kani)]
impl kani::Arbitrary for Mark {
    fn any() -> Self {
        if kani::any() { Mark::X } else { Mark::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Move::new(kani::any(), index)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Board::from_cells(cells)
    }
}
