//! Text rendering of boards, status, and the jump menu.

use crate::config::DisplayConfig;
use strictly_timetravel::{Board, GameState, Square};

/// Draws `board` as three rows, bracketing `highlighted` cells when enabled.
pub fn render_board(board: &Board, highlighted: &[usize], config: &DisplayConfig) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let symbol = match board.square_at(index) {
                Some(Square::Occupied(player)) => player.to_string(),
                _ if *config.show_indices() => index.to_string(),
                _ => ".".to_string(),
            };
            if *config.highlight_winner() && highlighted.contains(&index) {
                result.push_str(&format!("[{}]", symbol));
            } else {
                result.push_str(&format!(" {} ", symbol));
            }
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

/// Board followed by the status line.
pub fn render_game(game: &GameState, config: &DisplayConfig) -> String {
    let status = game.status();
    format!(
        "{}\n{}",
        render_board(game.current_board(), status.highlighted(), config),
        status
    )
}

/// One jump-menu entry per line, marking the current snapshot.
pub fn render_move_list(game: &GameState) -> String {
    let current = game.current_index();
    game.move_list()
        .iter()
        .map(|entry| {
            let marker = if entry.index == current { '>' } else { ' ' };
            format!("{} {}. {}", marker, entry.index, entry)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
