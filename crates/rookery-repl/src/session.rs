//! Line-driven game session: reads commands, applies them to a [`Game`] and
//! writes the results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{CastleSide, Color, Game, MoveRecord, Square};

use crate::command::{Command, HELP, Query, SessionOption, parse_command};
use crate::error::ReplError;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Draw the board from the side to move's point of view.
    pub flip: bool,
    /// Draw the board after every move.
    pub autoshow: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            flip: false,
            autoshow: true,
        }
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive two-player game.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the initial position with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session around an existing game.
    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            config: SessionConfig::default(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current settings.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `reader` until `quit` or end of input.
    ///
    /// Rejected commands are reported on `writer` and the loop continues;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<(), ReplError> {
        info!("session started");
        writeln!(writer, "rookery: type \"help\" for a list of commands")?;
        if self.config.autoshow {
            self.show_board(writer)?;
        }

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = parse_command(trimmed).and_then(|cmd| self.dispatch(cmd, writer));
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ReplError::Io { source }) => return Err(ReplError::Io { source }),
                Err(e) => {
                    warn!(error = %e, cmd = %trimmed, "command rejected");
                    writeln!(writer, "error: {e}")?;
                }
            }
        }

        info!(plies = self.game.history().len(), "session shutting down");
        Ok(())
    }

    /// Carry out one command.
    pub fn dispatch<W: Write>(&mut self, command: Command, writer: &mut W) -> Result<Flow, ReplError> {
        match command {
            Command::Move { from, to } => self.handle_move(from, to, writer)?,
            Command::Castle(side) => self.handle_castle(side, writer)?,
            Command::Query(query) => self.handle_query(query, writer)?,
            Command::SetOption(option) => self.handle_set(option, writer)?,
            Command::NewGame => {
                self.game = Game::new();
                writeln!(writer, "new game")?;
                if self.config.autoshow {
                    self.show_board(writer)?;
                }
            }
            Command::Help => writeln!(writer, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_move<W: Write>(&mut self, from: Square, to: Square, writer: &mut W) -> Result<(), ReplError> {
        let mover = self.game.side_to_move();
        let record = self.game.apply_move(from, to)?;
        self.after_move(mover, record, writer)
    }

    fn handle_castle<W: Write>(&mut self, side: CastleSide, writer: &mut W) -> Result<(), ReplError> {
        let mover = self.game.side_to_move();
        let record = self.game.castle(side, mover)?;
        self.after_move(mover, record, writer)
    }

    fn after_move<W: Write>(
        &self,
        mover: Color,
        record: MoveRecord,
        writer: &mut W,
    ) -> Result<(), ReplError> {
        if record.is_castle() {
            writeln!(writer, "{mover} castles {record}")?;
        } else {
            writeln!(writer, "{mover} plays {record}")?;
        }
        if self.config.autoshow {
            self.show_board(writer)?;
        }
        // The move is already committed; a failed check lookup must not
        // surface as a rejected command.
        let next = self.game.side_to_move();
        match self.game.in_check(next) {
            Ok(true) => writeln!(writer, "{next} is in check")?,
            Ok(false) => {}
            Err(e) => warn!(error = %e, color = %next, "check state unavailable"),
        }
        Ok(())
    }

    fn handle_query<W: Write>(&self, query: Query, writer: &mut W) -> Result<(), ReplError> {
        match query {
            Query::Board => self.show_board(writer)?,
            Query::Turn => {
                let side = self.game.side_to_move();
                if self.game.in_check(side)? {
                    writeln!(writer, "{side} to move (in check)")?;
                } else {
                    writeln!(writer, "{side} to move")?;
                }
            }
            Query::History => {
                let history = self.game.history();
                if history.is_empty() {
                    writeln!(writer, "no moves yet")?;
                }
                for (n, pair) in history.chunks(2).enumerate() {
                    match pair {
                        [white, black] => writeln!(writer, "{}. {white} {black}", n + 1)?,
                        [white] => writeln!(writer, "{}. {white}", n + 1)?,
                        _ => {}
                    }
                }
            }
            Query::Moves(square) => {
                let destinations = self.game.destinations(square)?;
                if destinations.is_empty() {
                    writeln!(writer, "{square}: no moves")?;
                } else {
                    writeln!(writer, "{square}: {destinations}")?;
                }
            }
        }
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, writer: &mut W) -> Result<(), ReplError> {
        let (name, enabled) = match option {
            SessionOption::Flip(on) => {
                self.config.flip = on;
                ("flip", on)
            }
            SessionOption::AutoShow(on) => {
                self.config.autoshow = on;
                ("autoshow", on)
            }
        };
        let state = if enabled { "on" } else { "off" };
        writeln!(writer, "{name} {state}")?;
        Ok(())
    }

    fn show_board<W: Write>(&self, writer: &mut W) -> Result<(), ReplError> {
        let board = self.game.board();
        if self.config.flip {
            writeln!(writer, "{}", board.pretty_from(self.game.side_to_move()))?;
        } else {
            writeln!(writer, "{}", board.pretty())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rookery_core::{Board, CastleSide, ChessError, Color, Game, Square};

    use super::{Flow, Session, SessionConfig};
    use crate::command::{Command, Query, SessionOption};
    use crate::error::ReplError;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert!(!config.flip);
        assert!(config.autoshow);
    }

    #[test]
    fn dispatch_move_reports_it() {
        let mut session = Session::new();
        let mut out = Vec::new();
        let flow = session
            .dispatch(Command::Move { from: sq("e2"), to: sq("e4") }, &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("white plays e2e4\n"));
        assert_eq!(session.game().side_to_move(), Color::Black);
    }

    #[test]
    fn dispatch_rejected_move_is_an_error() {
        let mut session = Session::new();
        let mut out = Vec::new();
        let err = session
            .dispatch(Command::Move { from: sq("e7"), to: sq("e5") }, &mut out)
            .unwrap_err();
        assert!(matches!(err, ReplError::Chess(ChessError::WrongTurn { .. })));
        assert!(out.is_empty());
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn set_option_updates_config() {
        let mut session = Session::new();
        let mut out = Vec::new();
        session
            .dispatch(Command::SetOption(SessionOption::Flip(true)), &mut out)
            .unwrap();
        session
            .dispatch(Command::SetOption(SessionOption::AutoShow(false)), &mut out)
            .unwrap();
        assert_eq!(
            session.config(),
            SessionConfig {
                flip: true,
                autoshow: false
            }
        );
        assert_eq!(String::from_utf8(out).unwrap(), "flip on\nautoshow off\n");
    }

    #[test]
    fn flipped_board_follows_side_to_move() {
        let mut session = Session::new();
        let mut out = Vec::new();
        session
            .dispatch(Command::SetOption(SessionOption::Flip(true)), &mut out)
            .unwrap();
        session
            .dispatch(Command::SetOption(SessionOption::AutoShow(false)), &mut out)
            .unwrap();
        session
            .dispatch(Command::Move { from: sq("d2"), to: sq("d4") }, &mut out)
            .unwrap();
        out.clear();
        session.dispatch(Command::Query(Query::Board), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "1  R N B K Q B N R");
        assert_eq!(lines[8], "   h g f e d c b a");
    }

    #[test]
    fn history_pairs_moves() {
        let mut session = Session::new();
        let mut out = Vec::new();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            session
                .dispatch(Command::Move { from: sq(from), to: sq(to) }, &mut out)
                .unwrap();
        }
        out.clear();
        session.dispatch(Command::Query(Query::History), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. e2e4 e7e5\n2. g1f3\n");
    }

    #[test]
    fn move_is_reported_when_opponent_has_no_king() {
        let board: Board = "8/8/8/8/8/8/4P3/4K3".parse().unwrap();
        let mut session = Session::with_game(Game::from_board(board));
        let mut out = Vec::new();
        let flow = session
            .dispatch(Command::Move { from: sq("e2"), to: sq("e3") }, &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(String::from_utf8(out).unwrap().starts_with("white plays e2e3\n"));
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn castling_is_announced_as_such() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R".parse().unwrap();
        let mut session = Session::with_game(Game::from_board(board));
        let mut out = Vec::new();
        session
            .dispatch(Command::Castle(CastleSide::KingSide), &mut out)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("white castles O-O\n"));
    }

    #[test]
    fn quit_stops() {
        let mut session = Session::new();
        let mut out = Vec::new();
        assert_eq!(session.dispatch(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
