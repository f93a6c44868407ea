//! Exhaustive tests for win detection over every possible board.

use strictly_timetravel::{Board, LINES, Player, Square, evaluate, is_draw, is_full};

/// Every assignment of Empty/X/O to the nine squares (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn uniform_line(board: &Board, line: [usize; 3]) -> Option<Player> {
    let squares = board.squares();
    let [a, b, c] = line;
    match squares[a] {
        Square::Occupied(p) if squares[b] == squares[a] && squares[c] == squares[a] => Some(p),
        _ => None,
    }
}

#[test]
fn test_evaluate_matches_first_uniform_line() {
    let mut wins = 0;
    for board in all_boards() {
        let expected = LINES
            .iter()
            .find_map(|line| uniform_line(&board, *line).map(|p| (p, *line)));
        let actual = evaluate(&board).map(|w| (w.winner, w.cells));
        assert_eq!(actual, expected, "board:\n{}", board);
        if actual.is_some() {
            wins += 1;
        }
    }
    // Sanity check that the sweep actually visits winning boards
    assert!(wins > 0);
}

#[test]
fn test_evaluate_never_reports_unowned_cells() {
    for board in all_boards() {
        if let Some(win) = evaluate(&board) {
            for cell in win.cells {
                assert_eq!(board.square_at(cell), Some(Square::Occupied(win.winner)));
            }
        }
    }
}

#[test]
fn test_draw_is_full_without_winner() {
    for board in all_boards() {
        assert_eq!(is_draw(&board), is_full(&board) && evaluate(&board).is_none());
    }
}

#[test]
fn test_line_order_is_fixed() {
    assert_eq!(
        LINES,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}
