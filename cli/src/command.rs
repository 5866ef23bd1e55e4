use deminer_core::Coord;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r X Y, reveal X Y   reveal the cell at column X, row Y
  f X Y, flag X Y     toggle the flag on the cell at column X, row Y
  n, new              start a new game
  d, dump             print the board state as JSON
  h, help             show this message
  q, quit             leave";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord, Coord),
    Flag(Coord, Coord),
    New,
    Dump,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("`{0}` expects two coordinates, e.g. `{0} 3 4`")]
    MissingCoords(String),
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String, #[source] ParseIntError),
    #[error("Unexpected input after command: `{0}`")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                let (x, y) = parse_coords(name, &mut words)?;
                Command::Reveal(x, y)
            }
            "f" | "flag" => {
                let (x, y) = parse_coords(name, &mut words)?;
                Command::Flag(x, y)
            }
            "n" | "new" => Command::New,
            "d" | "dump" => Command::Dump,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };

        let rest: Vec<_> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::Trailing(rest.join(" ")));
        }
        Ok(command)
    }
}

fn parse_coords<'a>(
    name: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<(Coord, Coord), CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words
            .next()
            .ok_or_else(|| CommandError::MissingCoords(name.to_owned()))?;
        word.parse()
            .map_err(|err| CommandError::InvalidCoord(word.to_owned(), err))
    };
    let x = next()?;
    let y = next()?;
    Ok((x, y))
}
