//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events recorded in history, not side effects. They say
//! who placed a mark and where, and can be replayed or displayed on their own.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Zero-based row of the marked square.
    pub row: usize,
    /// Zero-based column of the marked square.
    pub col: usize,
}

impl Move {
    /// Creates a move for `player` at `position`.
    pub fn new(player: Player, position: Position) -> Self {
        Self {
            player,
            row: position.row(),
            col: position.col(),
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    ///
    /// `None` only for a record built by hand with an out-of-range row or column.
    pub fn position(&self) -> Option<Position> {
        Position::from_row_col(self.row, self.col)
    }

    /// Returns the row-major board index of this move.
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} played on row {}, col {}", self.player, self.row, self.col)
    }
}

/// Error returned when a move or jump is rejected.
///
/// Every rejection leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is outside the board (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The jump target is not a snapshot in history.
    #[display("History index {index} is out of range (history holds {len} snapshots)")]
    IndexOutOfRange {
        /// Requested snapshot index.
        index: usize,
        /// Number of snapshots in history at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
