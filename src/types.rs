//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Mark {
    /// The X mark (moves first).
    X,
    /// The O mark (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the display symbol for this mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    /// Parses a mark from a text symbol (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMark`] when the symbol is not one of the two
    /// allowed values.
    #[instrument]
    pub fn from_symbol(symbol: &str) -> Result<Self, InvalidMark> {
        let trimmed = symbol.trim();
        <Mark as strum::IntoEnumIterator>::iter()
            .find(|mark| mark.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                warn!(symbol, "Rejected invalid mark symbol");
                InvalidMark::new(symbol)
            })
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a mark symbol is not one of the two allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Mark must be 'X' or 'O', got '{}'", symbol)]
pub struct InvalidMark {
    /// The rejected symbol.
    pub symbol: String,
}

impl InvalidMark {
    /// Creates a new invalid-mark error.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Sole owner of the grid: cells transition from empty to occupied exactly
/// once and only revert through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at the given index is empty.
    ///
    /// Out-of-range indices report false.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of all nine cells.
    ///
    /// The returned array is a snapshot; mutating it has no effect on the
    /// board.
    pub fn cells(&self) -> [Cell; 9] {
        self.cells
    }

    /// Places a mark at the given index.
    ///
    /// Returns `Ok(true)` when the cell was empty and the mark was written,
    /// `Ok(false)` when the cell is already occupied (the board is left
    /// untouched).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] when the index is out of range.
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<bool, BoardError> {
        if index >= 9 {
            return Err(BoardError::InvalidIndex(index));
        }
        if self.cells[index] != Cell::Empty {
            return Ok(false);
        }
        self.cells[index] = Cell::Occupied(mark);
        Ok(true)
    }

    /// Resets all nine cells to empty. Idempotent.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Counts the cells occupied by the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns the indices of all empty cells.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..9).filter(|&index| self.is_empty(index)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Formats the board as a 3x3 grid; empty cells show their index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{index}")?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when addressing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The index does not address one of the nine cells.
    #[display("Cell index {} is out of range (expected 0-8)", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for BoardError {}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with the given mark winning.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has ended in a win or a tie.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}
