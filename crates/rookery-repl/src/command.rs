//! Command parsing for the interactive console.

use rookery_core::{CastleSide, Square};

use crate::error::ReplError;

/// A read-only request about the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Render the board.
    Board,
    /// Report the side to move and whether it is in check.
    Turn,
    /// List the moves played so far.
    History,
    /// List the destinations of the piece on a square.
    Moves(Square),
}

/// A session setting adjustable with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Render the board from the side to move's point of view.
    Flip(bool),
    /// Render the board after every successful move.
    AutoShow(bool),
}

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e2 e4`, `e2e4` or `move e2 e4` -- move a piece.
    Move { from: Square, to: Square },
    /// `O-O` / `O-O-O` -- castle the side to move.
    Castle(CastleSide),
    /// `board`, `turn`, `history`, `moves <sq>` -- inspect the game.
    Query(Query),
    /// `set <option> on|off` -- change a session setting.
    SetOption(SessionOption),
    /// `new` -- start over from the initial position.
    NewGame,
    /// `help` -- list commands.
    Help,
    /// `quit` / `exit` -- leave the session.
    Quit,
}

/// Usage summary printed by `help`.
pub const HELP: &str = "\
commands:
  e2 e4 | e2e4 | move e2 e4   move a piece
  O-O | O-O-O                 castle kingside / queenside
  board                       show the board
  turn                        show the side to move
  history                     list the moves played
  moves <square>              list where a piece can go
  set flip on|off             show the board from the mover's side
  set autoshow on|off         show the board after every move
  new                         start a new game
  quit                        leave";

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ReplError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Err(ReplError::UnknownCommand {
            command: String::new(),
        });
    };
    let args = &tokens[1..];

    match first.to_ascii_lowercase().as_str() {
        "move" => parse_move("move", args),
        "o-o" | "0-0" | "o-o-o" | "0-0-0" => {
            Ok(Command::Castle(first.to_ascii_uppercase().parse()?))
        }
        "board" | "show" => Ok(Command::Query(Query::Board)),
        "turn" => Ok(Command::Query(Query::Turn)),
        "history" => Ok(Command::Query(Query::History)),
        "moves" => {
            let square = args.first().ok_or(ReplError::MissingArgument {
                command: "moves",
                expected: "a square",
            })?;
            Ok(Command::Query(Query::Moves(square.parse()?)))
        }
        "set" => parse_set(args),
        "new" => Ok(Command::NewGame),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ if looks_like_coordinates(first) => parse_move("move", &tokens),
        _ => Err(ReplError::UnknownCommand {
            command: first.to_string(),
        }),
    }
}

/// A bare `e2` or `e2e4` starts a move; anything else is a keyword.
fn looks_like_coordinates(token: &str) -> bool {
    let bytes = token.as_bytes();
    matches!(bytes.len(), 2 | 4) && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit()
}

/// Parse `e2 e4` or `e2e4`.
fn parse_move(command: &'static str, args: &[&str]) -> Result<Command, ReplError> {
    let missing = ReplError::MissingArgument {
        command,
        expected: "two squares, e.g. e2 e4",
    };
    let (from, to) = match args {
        [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
        [from, to, ..] => (*from, *to),
        _ => return Err(missing),
    };
    Ok(Command::Move {
        from: from.parse()?,
        to: to.parse()?,
    })
}

/// Parse `set <option> on|off`.
fn parse_set(args: &[&str]) -> Result<Command, ReplError> {
    let [name, value, ..] = args else {
        return Err(ReplError::MissingArgument {
            command: "set",
            expected: "an option and a value",
        });
    };
    let invalid = || ReplError::InvalidOption {
        name: name.to_string(),
        value: value.to_string(),
    };
    let enabled = match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        _ => return Err(invalid()),
    };
    match name.to_ascii_lowercase().as_str() {
        "flip" => Ok(Command::SetOption(SessionOption::Flip(enabled))),
        "autoshow" => Ok(Command::SetOption(SessionOption::AutoShow(enabled))),
        _ => Err(invalid()),
    }
}
