//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The move recorded at history index k was made by X when k is odd and by
/// O when k is even, so the first move is always X's.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, snapshot)| {
                snapshot
                    .last_move()
                    .is_some_and(|mov| mov.player == Player::for_history_len(k))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
