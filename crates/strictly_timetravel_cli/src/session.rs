//! Interactive play session over a line-oriented reader and writer.

use crate::config::DisplayConfig;
use crate::render::{render_game, render_move_list};
use std::io::{BufRead, Write};
use strictly_timetravel::{GameState, Position};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  move <cell>   place the next mark (0-8 or a name like 'center')
  jump <index>  go back to a history index (see 'history')
  history       list every snapshot
  board         show the board again
  help          show this text
  quit          leave the game";

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Place a mark at a cell index.
    Move(usize),
    /// Truncate history to an index.
    Jump(usize),
    /// Print the jump menu.
    History,
    /// Print the board and status.
    Board,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        let command = match verb.to_lowercase().as_str() {
            "move" | "m" => {
                let index = match rest.trim().parse::<usize>() {
                    Ok(index) => index,
                    Err(_) => Position::from_label_or_number(&rest)
                        .map(Position::to_index)
                        .ok_or_else(|| format!("Unknown cell '{}'", rest))?,
                };
                SessionCommand::Move(index)
            }
            "jump" | "j" => {
                let index = rest
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| format!("Expected a history index, got '{}'", rest))?;
                SessionCommand::Jump(index)
            }
            "history" | "h" => SessionCommand::History,
            "board" | "b" => SessionCommand::Board,
            "help" | "?" => SessionCommand::Help,
            "quit" | "q" | "exit" => SessionCommand::Quit,
            other => return Err(format!("Unknown command '{}' (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

/// Applies `command` to `game` and returns the text to show.
///
/// Rejected moves and jumps are reported in the text; the game is left as it was.
#[instrument(skip(game, config))]
pub fn execute(game: &mut GameState, command: &SessionCommand, config: &DisplayConfig) -> String {
    match command {
        SessionCommand::Move(index) => match game.apply_move(*index) {
            Ok(()) => render_game(game, config),
            Err(e) => format!("Rejected: {}", e),
        },
        SessionCommand::Jump(index) => match game.jump_to(*index) {
            Ok(()) => render_game(game, config),
            Err(e) => format!("Rejected: {}", e),
        },
        SessionCommand::History => render_move_list(game),
        SessionCommand::Board => render_game(game, config),
        SessionCommand::Help => HELP.to_string(),
        SessionCommand::Quit => "Bye.".to_string(),
    }
}

/// Runs a session until `quit` or end of input.
///
/// The session owns its game; nothing outlives the call.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &DisplayConfig) -> anyhow::Result<()> {
    let mut game = GameState::new();
    info!("Session started");
    writeln!(output, "{}\n{}\n", HELP, render_game(&game, config))?;

    for line in input.lines() {
        let line = line?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                debug!(%message, "Unparsed input");
                writeln!(output, "{}\n", message)?;
                continue;
            }
        };

        writeln!(output, "{}\n", execute(&mut game, &command, config))?;
        if command == SessionCommand::Quit {
            break;
        }
    }

    output.flush()?;
    info!(snapshots = game.len(), "Session ended");
    Ok(())
}
