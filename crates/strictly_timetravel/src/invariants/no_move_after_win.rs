//! No move after win: history ends at the first completed line.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: only the last snapshot may hold a winning board.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some((_, earlier)) = history.split_last() else {
            return true;
        };
        earlier.iter().all(|snapshot| evaluate(snapshot.board()).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a player has won"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position, Snapshot};

    #[test]
    fn test_winning_final_move_holds() {
        let game = GameState::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
        assert!(game.is_over());
        assert!(NoMoveAfterWinInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameState::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
        let board = game.current_board().with_mark(Position::BottomRight, Player::O);
        game.history
            .push(Snapshot::after(board, Move::new(Player::O, Position::BottomRight)));
        assert!(!NoMoveAfterWinInvariant::holds(&game));
    }
}
