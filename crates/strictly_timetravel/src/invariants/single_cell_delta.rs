//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly the recorded cell.
///
/// For every k ≥ 1, `history[k]` carries a move, the only cell that changed
/// since `history[k-1]` is that move's cell, and it went from empty to the
/// mover's mark. Earlier marks are never overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mov) = after.last_move() else {
                return false;
            };
            let index = mov.index();

            before.board().diff(after.board()) == [index]
                && before.board().square_at(index) == Some(Square::Empty)
                && after.board().square_at(index) == Some(Square::Occupied(mov.player))
        })
    }

    fn description() -> &'static str {
        "Each snapshot changes exactly one empty cell to the mover's mark"
    }
}
