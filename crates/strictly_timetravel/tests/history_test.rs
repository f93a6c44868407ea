//! Tests for snapshot history and time travel.

use strictly_timetravel::{
    Board, GameState, GameStatus, HistoryInvariants, InvariantSet, Move, MoveError, Player,
    Position, Square, evaluate, is_draw,
};

fn marks(board: &Board) -> Vec<Option<Player>> {
    board.squares().iter().map(|s| s.player()).collect()
}

#[test]
fn test_scenario_top_row_win() {
    let mut game = GameState::new();
    let expected = [Player::X, Player::O, Player::X, Player::O, Player::X];

    for (cell, player) in [0, 4, 1, 3, 2].into_iter().zip(expected) {
        assert_eq!(game.active_player(), player);
        game.apply_move(cell).expect("legal move");
    }

    let board = game.current_board();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(board.get(pos), Square::Occupied(Player::X));
    }
    let win = evaluate(board).expect("X wins");
    assert_eq!(win.winner, Player::X);
    assert_eq!(win.cells, [0, 1, 2]);
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_scenario_occupied_cell_rejected() {
    let mut game = GameState::new();
    game.apply_move(0).expect("legal move");

    assert_eq!(game.apply_move(0), Err(MoveError::CellOccupied(Position::TopLeft)));
    assert_eq!(game.len(), 2);

    let mut expected = vec![None; 9];
    expected[0] = Some(Player::X);
    assert_eq!(marks(game.current_board()), expected);
    // O is still to move
    assert_eq!(game.active_player(), Player::O);
}

#[test]
fn test_scenario_full_board_draw() {
    let game = GameState::replay(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).expect("legal moves");
    let board = game.current_board();

    for (i, square) in board.squares().iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(*square, Square::Occupied(expected));
    }
    assert_eq!(evaluate(board), None);
    assert!(is_draw(board));
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_over());
}

#[test]
fn test_scenario_jump_to_start_then_new_branch() {
    let mut game = GameState::replay(&[0, 4, 8]).expect("legal moves");
    game.jump_to(0).expect("index in range");

    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.active_player(), Player::X);
    assert_eq!(game.len(), 1);

    // Cell 0 was X's before the jump; the new branch can take it for X again
    game.apply_move(4).expect("legal move");
    game.apply_move(0).expect("legal move");
    assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_legal_move_changes_exactly_one_cell() {
    let cells = [4, 0, 8, 2, 1, 7, 6];
    let mut game = GameState::new();

    for cell in cells {
        let before = game.current_board().clone();
        let len = game.len();
        let player = game.active_player();

        game.apply_move(cell).expect("legal move");

        assert_eq!(game.len(), len + 1);
        assert_eq!(before.diff(game.current_board()), vec![cell]);
        assert_eq!(before.square_at(cell), Some(Square::Empty));
        assert_eq!(game.current_board().square_at(cell), Some(Square::Occupied(player)));
    }
}

#[test]
fn test_active_player_alternates() {
    let mut game = GameState::new();
    let mut previous = game.active_player();
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.apply_move(cell).expect("legal move");
        assert_eq!(game.active_player(), previous.opponent());
        previous = game.active_player();
    }
}

#[test]
fn test_jump_restores_every_snapshot() {
    let cells = [4, 0, 8, 2, 1, 7];
    let full = GameState::replay(&cells).expect("legal moves");

    for k in 0..full.len() {
        let mut game = full.clone();
        let expected = full.history()[k].board().clone();

        game.jump_to(k).expect("index in range");
        assert_eq!(game.current_board(), &expected);
        assert_eq!(game.len(), k + 1);
        let parity = if (k + 1) % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(game.active_player(), parity);
        assert!(HistoryInvariants::check_all(&game).is_ok());

        // Jumping to the same index again changes nothing
        let before = game.clone();
        game.jump_to(k).expect("index in range");
        assert_eq!(game, before);
    }
}

#[test]
fn test_moves_after_win_rejected() {
    let mut game = GameState::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
    let before = game.clone();

    for cell in 0..9 {
        assert_eq!(game.apply_move(cell), Err(MoveError::GameOver));
    }
    assert_eq!(game, before);
}

#[test]
fn test_jump_back_from_win_reopens_game() {
    let mut game = GameState::replay(&[0, 4, 1, 3, 2]).expect("legal moves");
    game.jump_to(4).expect("index in range");

    assert_eq!(game.winner(), None);
    assert_eq!(game.active_player(), Player::X);

    // X blocks elsewhere, O completes the middle row on the new branch
    game.apply_move(6).expect("legal move");
    game.apply_move(5).expect("legal move");
    let win = game.winner().expect("O wins");
    assert_eq!(win.winner, Player::O);
    assert_eq!(win.cells, [3, 4, 5]);
    assert_eq!(game.status(), GameStatus::Won(win));
}

#[test]
fn test_move_list_labels() {
    let game = GameState::replay(&[4, 0]).expect("legal moves");
    let list = game.move_list();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0].last_move, None);
    assert_eq!(list[1].last_move, Some(Move::new(Player::X, Position::Center)));
    let labels: Vec<String> = list.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (X played on row 1, col 1)",
            "Go to move #2 (O played on row 0, col 0)",
        ]
    );
}

#[test]
fn test_move_list_serializes() {
    let game = GameState::replay(&[2]).expect("legal move");
    let json = serde_json::to_value(game.move_list()).expect("serializable");

    assert_eq!(json[0]["index"], 0);
    assert!(json[0]["last_move"].is_null());
    assert_eq!(json[1]["last_move"]["player"], "X");
    assert_eq!(json[1]["last_move"]["row"], 0);
    assert_eq!(json[1]["last_move"]["col"], 2);
}
