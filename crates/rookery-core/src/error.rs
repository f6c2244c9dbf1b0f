//! Error types for move application, castling, notation and board setup.

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::square::Square;

/// Why a castling request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastleBlock {
    /// The king or the castling rook has moved at some point in the game.
    #[error("king or rook has already moved")]
    AlreadyMoved,
    /// The king or the rook is not standing on its home square.
    #[error("king or rook is not on its home square")]
    PieceMissing,
    /// A square between king and rook is occupied.
    #[error("path between king and rook is occupied")]
    PathOccupied,
    /// The king is currently in check.
    #[error("king is in check")]
    KingInCheck,
    /// The square the king crosses is attacked.
    #[error("king would pass through an attacked square")]
    PathAttacked,
    /// The king would land on an attacked square.
    #[error("destination square is attacked")]
    DestinationAttacked,
}

/// Errors returned by the rules engine. None of them leave the game modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square string is not a file letter a-h followed by a rank digit 1-8.
    #[error("invalid square notation: \"{input}\"")]
    InvalidNotation {
        /// The rejected input.
        input: String,
    },
    /// A move was requested from an empty square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin square.
        square: Square,
    },
    /// The piece on the origin square belongs to the side not on move.
    #[error("piece on {square} is {color}, but it is not {color}'s turn")]
    WrongTurn {
        /// The origin square.
        square: Square,
        /// Color of the piece that was asked to move.
        color: Color,
    },
    /// The destination is not reachable by the piece.
    #[error("{from} cannot move to {to}")]
    IllegalDestination {
        /// Origin square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
    /// The move would leave the mover's own king attacked.
    #[error("{from}{to} would leave the king in check")]
    KingWouldBeInCheck {
        /// Origin square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
    /// Castling preconditions are not met.
    #[error("{color} cannot castle {side}: {reason}")]
    CastlingIneligible {
        /// Side attempting to castle.
        color: Color,
        /// Requested castling side.
        side: CastleSide,
        /// The first failed precondition.
        reason: CastleBlock,
    },
    /// No king of the given color is on the board.
    #[error("no {color} king on the board")]
    KingNotFound {
        /// Color whose king is missing.
        color: Color,
    },
    /// A piece-placement string could not be parsed.
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] PlacementError),
}

/// Errors from parsing a piece-placement string such as
/// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Board row (7 = first row in the string).
        row: u8,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
