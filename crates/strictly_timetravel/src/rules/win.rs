//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: who won and which cells form the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The player owning all three cells.
    pub winner: Player,
    /// Board indices of the winning triple, in line order.
    pub cells: [usize; 3],
}

/// Evaluates a board against the winning triples.
///
/// Returns the first triple, in [`LINES`] order, whose three squares are
/// occupied by the same player. Ongoing and drawn boards both yield `None`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[a] == squares[b] && squares[a] == squares[c] => {
            Some(WinResult {
                winner: player,
                cells: [a, b, c],
            })
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.winner)
}
