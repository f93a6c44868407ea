//! Start snapshot invariant: history always opens on the empty board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `history[0]` is the empty-board snapshot with no move.
///
/// Also rules out an empty history, since every game has a start.
pub struct StartSnapshotInvariant;

impl Invariant<GameState> for StartSnapshotInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first().is_some_and(|start| start.is_start())
    }

    fn description() -> &'static str {
        "History starts with the empty-board snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position, Snapshot};

    #[test]
    fn test_new_game_holds() {
        assert!(StartSnapshotInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_jump_to_start_holds() {
        let mut game = GameState::replay(&[4, 0]).expect("legal moves");
        game.jump_to(0).expect("index in range");
        assert!(StartSnapshotInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!StartSnapshotInvariant::holds(&game));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut game = GameState::new();
        let board = game.current_board().with_mark(Position::Center, Player::X);
        game.history[0] = Snapshot::after(board, Move::new(Player::X, Position::Center));
        assert!(!StartSnapshotInvariant::holds(&game));
    }
}
