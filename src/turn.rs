//! First-class turn records and outcomes.
//!
//! Moves are domain events, not side effects. They represent an applied
//! turn and can be replayed, serialized, and reasoned about by the
//! session invariants.

use crate::types::{BoardError, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One applied turn: a mark placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// The cell index (0-8) it was placed at.
    pub index: usize,
}

impl Move {
    /// Creates a new move record.
    #[instrument]
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Result of a single turn.
///
/// The three cases are deliberately distinct so callers cannot conflate a
/// rejected move with an accepted one that keeps the game going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The cell was occupied; nothing changed and the same player moves
    /// again.
    Rejected,
    /// The move was applied and the game continues with the other player.
    Continue,
    /// The move was applied and ended the game.
    Terminal {
        /// Human-readable announcement, e.g. "Alice wins!".
        message: String,
    },
}

/// Error that can occur when playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The index failed board validation.
    #[display("{}", _0)]
    Board(BoardError),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for TurnError {}

impl From<BoardError> for TurnError {
    fn from(err: BoardError) -> Self {
        TurnError::Board(err)
    }
}
