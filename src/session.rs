//! Player identity and the turn controller.
//!
//! [`GameSession`] owns the two [`Player`]s, the board, and the
//! current-turn pointer, and drives every move through
//! [`GameSession::play_turn`].

use crate::invariants;
use crate::rules;
use crate::turn::{Move, TurnError, TurnOutcome};
use crate::types::{Board, Cell, GameStatus, InvalidMark, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default display name for the player holding X.
pub const DEFAULT_NAME_X: &str = "Player 1";

/// Default display name for the player holding O.
pub const DEFAULT_NAME_O: &str = "Player 2";

/// A participant: a display name plus the mark they place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name shown in announcements.
    name: String,
    /// The mark this player places; fixed at construction.
    mark: Mark,
}

impl Player {
    /// Creates a player with the given name and mark.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        let name = name.into();
        debug!(%name, %mark, "Creating player");
        Self { name, mark }
    }

    /// Creates a player from a text symbol ("X"/"O", either case).
    pub fn from_symbol(name: impl Into<String>, symbol: &str) -> Result<Self, InvalidMark> {
        Ok(Self::new(name, Mark::from_symbol(symbol)?))
    }

    /// Renames the player. Empty input is ignored so a blank form field
    /// never clobbers an existing name.
    pub fn set_name(&mut self, name: &str) {
        if name.is_empty() {
            debug!(mark = %self.mark, "Ignoring empty name");
            return;
        }
        debug!(mark = %self.mark, name, "Renaming player");
        self.name = name.to_string();
    }
}

/// A game session with two players.
///
/// The session is the only writer of its board: marks land through
/// [`play_turn`](Self::play_turn) and leave through
/// [`reset_game`](Self::reset_game). Construction seeds the default
/// names ([`DEFAULT_NAME_X`]/[`DEFAULT_NAME_O`]) with X to move first,
/// and the session is reusable across any number of games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    pub(crate) board: Board,
    /// Player holding X.
    pub(crate) player_x: Player,
    /// Player holding O.
    pub(crate) player_o: Player,
    /// Mark whose move is next; frozen once the game ends.
    pub(crate) current: Mark,
    /// Game status.
    pub(crate) status: GameStatus,
    /// Moves of the current game, in order.
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a new game session with default player names.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            player_x: Player::new(DEFAULT_NAME_X, Mark::X),
            player_o: Player::new(DEFAULT_NAME_O, Mark::O),
            current: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Creates a session with the given player names.
    ///
    /// Empty names fall back to the defaults, matching
    /// [`set_player_names`](Self::set_player_names).
    pub fn with_names(first: impl Into<String>, second: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_player_names(&first.into(), &second.into());
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the nine cells in row-major order.
    pub fn cells(&self) -> [Cell; 9] {
        self.board.cells()
    }

    /// Returns the player whose move is next.
    ///
    /// Once the game has ended this stays frozen at the winner (or at the
    /// last mover on a tie) until [`reset_game`](Self::reset_game).
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the player holding the given mark.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the moves of the current game in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Human-readable status line for presentation layers.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player().name()),
            GameStatus::Won(mark) => format!("{} wins!", self.player(mark).name()),
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }

    /// Plays the current player's mark at the given cell index.
    ///
    /// Returns [`TurnOutcome::Rejected`] if the cell is occupied (no state
    /// changes, the same player moves again), [`TurnOutcome::Continue`] if
    /// the move was applied and the game goes on, or
    /// [`TurnOutcome::Terminal`] with a win or tie announcement if the move
    /// ended the game. An out-of-range index or a move after the game has
    /// ended is an error.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, TurnError> {
        // No moves after the game has ended
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Move attempted after game end");
            return Err(TurnError::GameOver);
        }

        let mark = self.current;

        // Out-of-range propagates; an occupied cell rejects without a
        // state transition
        if !self.board.place_mark(index, mark)? {
            warn!(index, %mark, "Cell occupied, move rejected");
            return Ok(TurnOutcome::Rejected);
        }

        self.history.push(Move::new(mark, index));
        debug!(index, %mark, "Mark placed");

        // Win relative to the mover takes precedence over a full board
        let outcome = if rules::wins(&self.board, mark) {
            self.status = GameStatus::Won(mark);
            info!(winner = %mark, "Game won");
            TurnOutcome::Terminal {
                message: format!("{} wins!", self.player(mark).name()),
            }
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Tied;
            info!("Game tied");
            TurnOutcome::Terminal {
                message: "It's a tie!".to_string(),
            }
        } else {
            self.current = mark.opponent();
            TurnOutcome::Continue
        };

        invariants::assert_invariants(self);
        Ok(outcome)
    }

    /// Starts a fresh game: clears the board and history, sets the status
    /// back to in-progress, and hands the first move to the X-holder.
    /// Player names are untouched. Idempotent.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!("Resetting game");
        self.board.reset();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.current = Mark::X;
    }

    /// Overwrites the player display names.
    ///
    /// Each name is applied only if non-empty; empty input leaves the
    /// existing name in place. Marks and turn order are unaffected.
    #[instrument(skip(self))]
    pub fn set_player_names(&mut self, first: &str, second: &str) {
        self.player_x.set_name(first);
        self.player_o.set_name(second);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
