//! Non-interactive replay of a fixed move sequence.

use crate::config::DisplayConfig;
use crate::render::{render_game, render_move_list};
use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use strictly_timetravel::{GameState, GameStatus, MoveListEntry, Player};
use tracing::instrument;

/// JSON shape printed by `replay --json`.
#[derive(Debug, Serialize)]
struct ReplayReport {
    status: GameStatus,
    active_player: Player,
    board: Vec<Option<Player>>,
    moves: Vec<MoveListEntry>,
}

impl ReplayReport {
    fn new(game: &GameState) -> Self {
        Self {
            status: game.status(),
            active_player: game.active_player(),
            board: game
                .current_board()
                .squares()
                .iter()
                .map(|square| square.player())
                .collect(),
            moves: game.move_list(),
        }
    }
}

/// Applies `moves`, optionally jumps to `jump`, and writes the result.
///
/// The first rejected move or jump aborts with an error naming it.
#[instrument(skip(output, config))]
pub fn run<W: Write>(
    moves: &[usize],
    jump: Option<usize>,
    json: bool,
    config: &DisplayConfig,
    mut output: W,
) -> anyhow::Result<()> {
    let mut game = GameState::new();
    for (n, &cell) in moves.iter().enumerate() {
        game.apply_move(cell)
            .with_context(|| format!("move {} (cell {}) was rejected", n + 1, cell))?;
    }
    if let Some(index) = jump {
        game.jump_to(index)
            .with_context(|| format!("jump to {} was rejected", index))?;
    }

    if json {
        serde_json::to_writer_pretty(&mut output, &ReplayReport::new(&game))?;
        writeln!(output)?;
    } else {
        writeln!(output, "{}\n\n{}", render_game(&game, config), render_move_list(&game))?;
    }
    Ok(())
}
