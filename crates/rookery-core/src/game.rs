//! Turn-taking game state: the board, the move history, and castling flags.

use tracing::debug;

use crate::board::Board;
use crate::castle_rights::{CastleSide, CastlingRights};
use crate::check::{check_castle_eligible, is_in_check};
use crate::chess_move::MoveRecord;
use crate::color::Color;
use crate::error::ChessError;
use crate::movegen::legal_destinations;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

/// A game in progress. The only owner that mutates its [`Board`].
///
/// Mutations go through [`Game::apply_move`] and [`Game::castle`]; both
/// validate on scratch copies first and leave the game untouched on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    castling: CastlingRights,
}

impl Game {
    /// Start a game from the standard initial layout.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// Start a game from an arbitrary placement, White to move, no castling
    /// flags set.
    pub fn from_board(board: Board) -> Game {
        Game {
            board,
            history: Vec::new(),
            castling: CastlingRights::FRESH,
        }
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Current "has moved" flags.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The side to move: White after an even number of moves, Black after an odd.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        Color::from_ply(self.history.len())
    }

    /// Return the occupant of `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Return the square of `color`'s king.
    ///
    /// # Errors
    ///
    /// [`ChessError::KingNotFound`] if `color` has no king.
    pub fn king_square(&self, color: Color) -> Result<Square, ChessError> {
        self.board.king_square(color)
    }

    /// All squares occupied by the color opposite `color`.
    pub fn opponent_squares(&self, color: Color) -> SquareSet {
        self.board.opponent_squares(color)
    }

    /// Return `true` if `color`'s king is currently attacked.
    ///
    /// # Errors
    ///
    /// [`ChessError::KingNotFound`] if `color` has no king.
    pub fn in_check(&self, color: Color) -> Result<bool, ChessError> {
        is_in_check(color, &self.board, None)
    }

    /// Destinations of the piece on `from` that do not leave its own king in
    /// check. Empty for an empty square. Castling is not listed.
    ///
    /// # Errors
    ///
    /// [`ChessError::KingNotFound`] if the piece's side has no king.
    pub fn destinations(&self, from: Square) -> Result<SquareSet, ChessError> {
        let Some(piece) = self.board.piece_at(from) else {
            return Ok(SquareSet::EMPTY);
        };
        let mut safe = SquareSet::EMPTY;
        for to in legal_destinations(piece.kind(), piece.color(), from, &self.board) {
            if !is_in_check(piece.color(), &self.board, Some((from, to)))? {
                safe.insert(to);
            }
        }
        Ok(safe)
    }

    /// Move the piece on `from` to `to` for the side to move.
    ///
    /// # Errors
    ///
    /// - [`ChessError::EmptySquare`] if `from` is empty.
    /// - [`ChessError::WrongTurn`] if the piece belongs to the other side.
    /// - [`ChessError::IllegalDestination`] if the piece cannot reach `to`.
    /// - [`ChessError::KingWouldBeInCheck`] if the move exposes the mover's king.
    /// - [`ChessError::KingNotFound`] if the mover has no king.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, ChessError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessError::EmptySquare { square: from })?;
        let us = self.side_to_move();
        if !piece.is(us) {
            return Err(ChessError::WrongTurn {
                square: from,
                color: piece.color(),
            });
        }
        if !legal_destinations(piece.kind(), us, from, &self.board).contains(to) {
            return Err(ChessError::IllegalDestination { from, to });
        }
        if is_in_check(us, &self.board, Some((from, to)))? {
            return Err(ChessError::KingWouldBeInCheck { from, to });
        }

        let captured = self.board.piece_at(to);
        self.board = self.board.with_move(from, to);
        self.castling.record_move(from, to);
        let record = MoveRecord::new(from, to);
        self.history.push(record);
        debug!(
            color = %us,
            piece = %piece,
            %from,
            %to,
            captured = ?captured,
            ply = self.history.len(),
            "move applied"
        );
        Ok(record)
    }

    /// Castle `color`'s king toward `side`.
    ///
    /// # Errors
    ///
    /// - [`ChessError::WrongTurn`] if `color` is not the side to move.
    /// - [`ChessError::CastlingIneligible`] with the failed precondition.
    /// - [`ChessError::KingNotFound`] if `color` has no king.
    pub fn castle(&mut self, side: CastleSide, color: Color) -> Result<MoveRecord, ChessError> {
        let king_from = CastleSide::king_origin(color);
        if color != self.side_to_move() {
            return Err(ChessError::WrongTurn {
                square: king_from,
                color,
            });
        }
        check_castle_eligible(color, side, &self.board, self.castling)?;

        self.board = self.board.with_castle(color, side);
        self.castling.mark_king(color);
        self.castling.mark_rook(color, side);
        let record = MoveRecord::castle(king_from, side.king_target(color), side);
        self.history.push(record);
        debug!(%color, %side, ply = self.history.len(), "castled");
        Ok(record)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
