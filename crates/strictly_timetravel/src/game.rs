//! Snapshot-history game engine for tic-tac-toe.
//!
//! The game is an append-only list of immutable [`Snapshot`]s. Moves append,
//! jumps truncate, and everything else (whose turn it is, the current board,
//! whether the game is over) is derived from the list on demand.

use super::action::{Move, MoveError};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::rules::{WinResult, evaluate};
use super::snapshot::{MoveListEntry, Snapshot};
use super::status::GameStatus;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with full history and time travel.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty start snapshot
/// - each later snapshot adds exactly one mark to the one before it
/// - the active player is X when `history.len()` is odd, O otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
}

impl GameState {
    /// Creates a new game holding only the start snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::start()],
        }
    }

    /// Replays cell indices from a fresh game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.apply_move(cell)?;
        }
        Ok(game)
    }

    /// Places the active player's mark at `cell_index` (0-8, row-major).
    ///
    /// Checks, in order, that the index is on the board, that nobody has won,
    /// and that the square is empty. A rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidIndex`], [`MoveError::GameOver`] or
    /// [`MoveError::CellOccupied`] when a precondition fails.
    #[instrument(skip(self), fields(player = %self.active_player(), len = self.history.len()))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<(), MoveError> {
        let pos = MoveContract::pre(self, &cell_index).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let player = self.active_player();
        let board = self.current_board().with_mark(pos, player);
        self.history.push(Snapshot::after(board, Move::new(player, pos)));

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(self) {
                self.history.pop();
                return Err(e);
            }
        }

        info!(%player, position = %pos, len = self.history.len(), "Move applied");
        Ok(())
    }

    /// Truncates history so that snapshot `index` becomes the current one.
    ///
    /// Later snapshots are discarded; there is no redo. The active player
    /// follows from the shorter history.
    ///
    /// # Errors
    ///
    /// [`MoveError::IndexOutOfRange`] if `index` is not in history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        JumpContract::pre(self, &index).inspect_err(|e| {
            debug!(error = %e, "Jump rejected");
        })?;

        let discarded = self.history.split_off(index + 1);

        #[cfg(debug_assertions)]
        {
            if let Err(e) = JumpContract::post(self) {
                self.history.extend(discarded);
                return Err(e);
            }
        }

        info!(
            index,
            discarded = discarded.len(),
            next = %self.active_player(),
            "Jumped back in history"
        );
        Ok(())
    }

    /// Board of the latest snapshot.
    pub fn current_board(&self) -> &Board {
        self.latest().board()
    }

    /// Jump menu entries, one per snapshot; index 0 has no move.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveListEntry {
                index,
                last_move: snapshot.last_move(),
            })
            .collect()
    }

    /// Player whose mark the next accepted move places.
    pub fn active_player(&self) -> Player {
        Player::for_history_len(self.history.len())
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Snapshot at `index`, if it exists.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.history.get(index)
    }

    /// Number of snapshots, counting the start.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history holds at least the start snapshot.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the current snapshot.
    pub fn current_index(&self) -> usize {
        self.history.len() - 1
    }

    /// Winning line on the current board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current_board())
    }

    /// Status of the current board, with draw made explicit.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.active_player())
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_finished()
    }

    /// Empty squares on the current board, or none once the game is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    fn latest(&self) -> &Snapshot {
        // history is never empty; see StartSnapshotInvariant
        &self.history[self.history.len() - 1]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
