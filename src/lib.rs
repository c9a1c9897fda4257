//! Tic-tac-toe core - board state and turn control
//!
//! This library provides the full game logic for two-player tic-tac-toe
//! with no presentation concerns attached.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with single-occupancy placement
//! - **Session**: two players, turn alternation, win/tie detection
//! - **Rules**: pure win and draw checks over a board
//! - **Invariants**: first-class, independently testable session guarantees
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, TurnOutcome};
//!
//! let mut session = GameSession::new();
//! session.set_player_names("Alice", "Bob");
//!
//! // Alice holds X and moves first
//! let outcome = session.play_turn(4)?;
//! assert_eq!(outcome, TurnOutcome::Continue);
//! assert_eq!(session.current_player().name(), "Bob");
//! # Ok::<(), tictactoe_core::TurnError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod invariants;
mod kani_support;
mod rules;
mod session;
mod turn;
mod types;

// Crate-level exports - Board and domain types
pub use types::{Board, BoardError, Cell, GameStatus, InvalidMark, Mark};

// Crate-level exports - Turn records and outcomes
pub use turn::{Move, TurnError, TurnOutcome};

// Crate-level exports - Session management
pub use session::{DEFAULT_NAME_O, DEFAULT_NAME_X, GameSession, Player};

// Crate-level exports - Rule checks
pub use rules::{is_draw, is_full, winner, wins};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, SessionInvariants,
    assert_invariants,
};
