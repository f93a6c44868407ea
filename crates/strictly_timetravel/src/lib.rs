//! Strictly Timetravel - tic-tac-toe with immutable history
//!
//! Game logic for a local two-player tic-tac-toe board whose every state is
//! kept as an immutable snapshot, so a caller can jump back to any earlier
//! point and play on from there.
//!
//! # Architecture
//!
//! - **GameState**: append-only snapshot history; apply moves, jump back
//! - **Rules**: pure win and draw detection over a board value
//! - **Invariants / Contracts**: checked pre- and postconditions for every transition
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameState, GameStatus, Player, evaluate};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_move(cell)?;
//! }
//! let win = evaluate(game.current_board()).expect("X completed the top row");
//! assert_eq!(win.winner, Player::X);
//! assert_eq!(win.cells, [0, 1, 2]);
//!
//! game.jump_to(0)?;
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
//! # Ok::<(), strictly_timetravel::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    CellInRange, CellIsEmpty, Contract, GameNotOver, IndexInHistory, JumpContract, LegalMove,
    MoveContract,
};
pub use game::GameState;
pub use invariants::{
    AlternatingTurnInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    NoMoveAfterWinInvariant, SingleCellDeltaInvariant, StartSnapshotInvariant,
};
pub use position::Position;
pub use rules::{LINES, WinResult, check_winner, evaluate, is_draw, is_full};
pub use snapshot::{MoveListEntry, Snapshot};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
