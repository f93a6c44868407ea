//! Game status derived from a board.

use super::rules::{WinResult, evaluate, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Where the game stands on a given board.
///
/// Status is never stored; it is recomputed from the latest snapshot so it
/// cannot drift from the history it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    InProgress {
        /// Player who moves next.
        next: Player,
    },
    /// A player completed a line.
    Won(WinResult),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Classifies `board`, with `next` as the player to move if play continues.
    pub fn of(board: &Board, next: Player) -> Self {
        if let Some(win) = evaluate(board) {
            GameStatus::Won(win)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(win.winner),
            _ => None,
        }
    }

    /// Returns true once no further move can be accepted.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Cells to highlight: the winning line, or nothing.
    pub fn highlighted(&self) -> &[usize] {
        match self {
            GameStatus::Won(win) => &win.cells[..],
            _ => &[],
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
