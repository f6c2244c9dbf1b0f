//! Pseudo-legal destination generation.
//!
//! Everything here is geometry and occupancy only: turn order and king safety
//! are the caller's concern.

mod pawns;
mod sliders;
mod steppers;

use crate::board::Board;
use crate::catalog::{Movement, movement};
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::pawns::pawn_destinations;
use self::sliders::slide_destinations;
use self::steppers::step_destinations;

/// Squares a `kind` piece of `color` standing on `from` may reach on `board`,
/// ignoring whether the move would expose its own king.
///
/// Castling is not produced here.
pub fn legal_destinations(kind: PieceKind, color: Color, from: Square, board: &Board) -> SquareSet {
    match movement(kind) {
        Movement::Sliding(dirs) => slide_destinations(dirs, color, from, board),
        Movement::Stepping(dirs) => step_destinations(dirs, color, from, board),
        Movement::Pawn => pawn_destinations(color, from, board),
    }
}

/// [`legal_destinations`] for whatever stands on `from`; empty for an empty square.
pub fn legal_destinations_from(from: Square, board: &Board) -> SquareSet {
    board
        .piece_at(from)
        .map_or(SquareSet::EMPTY, |p| legal_destinations(p.kind(), p.color(), from, board))
}
