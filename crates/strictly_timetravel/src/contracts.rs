//! Contract-based validation for moves and jumps.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}. Preconditions always run; postconditions
//! run in debug builds.

use super::action::MoveError;
use super::game::GameState;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Output of a successful precondition check.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(state: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square on the board.
pub struct CellInRange;

impl CellInRange {
    /// Resolves `index` to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::InvalidIndex(index))
    }
}

/// Precondition: nobody has won on the latest board.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects the move once the latest board has a winning line.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.winner().is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square on the latest board is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects the move if `pos` is already marked.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: range, game over, occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<Position, MoveError> {
        let pos = CellInRange::check(index)?;
        GameNotOver::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Precondition
// ─────────────────────────────────────────────────────────────

/// Precondition: the jump target is a snapshot in history.
pub struct IndexInHistory;

impl IndexInHistory {
    /// Rejects the jump unless `index < game.len()`.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<(), MoveError> {
        let len = game.len();
        if index < len {
            Ok(())
        } else {
            Err(MoveError::IndexOutOfRange { index, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

fn check_history(game: &GameState) -> Result<(), MoveError> {
    HistoryInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "History invariant violated");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for placing a mark by cell index.
///
/// Preconditions: [`LegalMove`]. Postconditions: all [`HistoryInvariants`].
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    fn pre(game: &GameState, index: &usize) -> Result<Position, MoveError> {
        LegalMove::check(*index, game)
    }

    fn post(game: &GameState) -> Result<(), MoveError> {
        check_history(game)
    }
}

/// Contract for truncating history to a snapshot index.
///
/// Preconditions: [`IndexInHistory`]. Postconditions: all [`HistoryInvariants`].
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Checked = ();

    fn pre(game: &GameState, index: &usize) -> Result<(), MoveError> {
        IndexInHistory::check(*index, game)
    }

    fn post(game: &GameState) -> Result<(), MoveError> {
        check_history(game)
    }
}
