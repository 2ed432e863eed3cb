use std::str::FromStr;
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal { row: i64, col: i64 },
    Flag { row: i64, col: i64 },
    NewGame,
    Settings { rows: String, cols: String, mines: String },
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Type a command, or `h` for help")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    WrongArgs {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a cell coordinate")]
    BadCoordinate(String),
}

pub(crate) const HELP: &str = "\
Commands:
  r ROW COL          reveal a cell
  f ROW COL          flag or unflag a cell
  n                  new game with the current settings
  s ROWS COLS MINES  apply new settings and start a new game
  h                  show this help
  q                  quit";

fn parse_coords(command: &'static str, args: &[&str]) -> Result<(i64, i64), CommandError> {
    let [row, col] = args else {
        return Err(CommandError::WrongArgs {
            command,
            expected: "ROW COL",
        });
    };
    let parse = |arg: &str| {
        arg.parse::<i64>()
            .map_err(|_| CommandError::BadCoordinate(arg.to_owned()))
    };
    Ok((parse(*row)?, parse(*col)?))
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::WrongArgs {
            command,
            expected: "no arguments",
        })
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                let (row, col) = parse_coords("reveal", &args)?;
                Ok(Command::Reveal { row, col })
            }
            "f" | "flag" => {
                let (row, col) = parse_coords("flag", &args)?;
                Ok(Command::Flag { row, col })
            }
            "n" | "new" => no_args("new", &args, Command::NewGame),
            "s" | "settings" => match args.as_slice() {
                [rows, cols, mines] => Ok(Command::Settings {
                    rows: (*rows).to_owned(),
                    cols: (*cols).to_owned(),
                    mines: (*mines).to_owned(),
                }),
                _ => Err(CommandError::WrongArgs {
                    command: "settings",
                    expected: "ROWS COLS MINES",
                }),
            },
            "h" | "help" | "?" => no_args("help", &args, Command::Help),
            "q" | "quit" | "exit" => no_args("quit", &args, Command::Quit),
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}
