use anyhow::Context;
use clap::Parser;
use deminer_core::{BoardEngine, CellCount, Coord, GameConfig, Session};
use std::io::{self, BufRead, Write};

use command::{Command, HELP};
use observer::TerminalObserver;

mod command;
mod observer;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(short = 'W', long, default_value_t = 16, allow_negative_numbers = true)]
    width: Coord,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = 16, allow_negative_numbers = true)]
    height: Coord,

    /// Number of mines, clamped to the board area
    #[arg(short, long, default_value_t = 32)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::try_new((args.width, args.height), args.mines)
        .with_context(|| format!("cannot play on a {}x{} board", args.width, args.height))?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut session = Session::new(
        BoardEngine::seeded(seed),
        TerminalObserver::new(io::stdout()),
    );
    session.start_game(config);
    run(&mut session, io::stdin().lock())
}

/// Feeds player commands from `input` into the session until `quit` or end of input.
fn run<R: BufRead, W: Write>(
    session: &mut Session<TerminalObserver<W>>,
    input: R,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("rejected command {line:?}: {err:?}");
                writeln!(session.observer_mut().writer(), "{err}")?;
                continue;
            }
        };
        log::trace!("command: {command:?}");

        match command {
            Command::Reveal(x, y) => {
                session.reveal(x, y);
            }
            Command::Flag(x, y) => {
                session.toggle_flag(x, y);
            }
            Command::New => session.restart(),
            Command::Dump => {
                let json = serde_json::to_string_pretty(session.engine())?;
                writeln!(session.observer_mut().writer(), "{json}")?;
            }
            Command::Help => writeln!(session.observer_mut().writer(), "{HELP}")?,
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deminer_core::{GameStatus, MineLayout};

    fn play(mines: &[(Coord, Coord)], input: &str) -> (BoardEngine, String) {
        let layout = MineLayout::from_mine_coords((3, 3), mines).unwrap();
        let mut session = Session::new(
            BoardEngine::from_layout(layout),
            TerminalObserver::new(Vec::new()),
        );

        run(&mut session, input.as_bytes()).unwrap();

        let (engine, observer) = session.into_parts();
        (engine, String::from_utf8(observer.into_inner()).unwrap())
    }

    #[test]
    fn playing_to_a_win() {
        let (engine, output) = play(&[(2, 2)], "r 0 0\nr 2 2\n");

        assert_eq!(engine.status(), GameStatus::Won);
        assert!(output.contains("you win"));
        assert!(!output.contains("boom"));
    }

    #[test]
    fn hitting_a_mine_and_ignoring_later_moves() {
        let (engine, output) = play(&[(1, 1)], "f 0 0\nr 1 1\nr 0 1\nf 2 2\n");

        assert_eq!(engine.status(), GameStatus::Lost);
        assert!(!engine.get_cell(0, 1).revealed);
        assert!(!engine.get_cell(2, 2).flagged);
        assert_eq!(output.matches("boom").count(), 1);
        assert_eq!(output.matches("mines left").count(), 2);
    }

    #[test]
    fn bad_commands_are_reported_and_skipped() {
        let (engine, output) = play(&[(1, 1)], "jump\n\nr 0\nq\nr 1 1\n");

        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(output.contains("Unknown command `jump`"));
        assert!(output.contains("`r` expects two coordinates"));
    }

    #[test]
    fn new_game_after_loss_starts_over() {
        let (engine, output) = play(&[(1, 1)], "r 1 1\nn\n");

        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.revealed_count(), 0);
        assert_eq!(engine.size(), (3, 3));
        assert_eq!(engine.mine_count(), 1);
        assert!(output.contains("new game: 3x3, 1 mines"));
    }

    #[test]
    fn dump_prints_engine_as_json() {
        let (_, output) = play(&[(1, 1)], "d\n");
        let json_start = output.find('{').unwrap();

        let value: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();

        assert_eq!(value["status"], "InProgress");
        assert_eq!(value["config"]["mines"], 1);
    }

    #[test]
    fn help_lists_commands() {
        let (_, output) = play(&[], "h\n");

        assert!(output.contains("reveal X Y"));
    }
}
