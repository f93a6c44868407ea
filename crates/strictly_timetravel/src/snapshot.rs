//! Immutable history entries.

use super::{Board, Move};
use serde::{Deserialize, Serialize};

/// Board state after a move, paired with the move that produced it.
///
/// The start snapshot carries an empty board and no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty-board snapshot every game begins with.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn after(board: Board, last_move: Move) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Board as it stood after this snapshot's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this snapshot, `None` for the start.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns true for the empty-board start snapshot.
    pub fn is_start(&self) -> bool {
        self.last_move.is_none() && self.board == Board::new()
    }
}

/// One row of the jump menu: a history index and the move recorded there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Snapshot index in history.
    pub index: usize,
    /// Move that produced the snapshot; `None` at index 0.
    pub last_move: Option<Move>,
}

impl std::fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last_move {
            Some(mov) => write!(f, "Go to move #{} ({})", self.index, mov),
            None => write!(f, "Go to game start"),
        }
    }
}
