//! Check detection and castling eligibility.
//!
//! Both work on scratch copies of the board: a hypothetical move is applied
//! with copy-make and the copy is dropped afterwards.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::{CastleSide, CastlingRights};
use crate::color::Color;
use crate::error::{CastleBlock, ChessError};
use crate::movegen::legal_destinations;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return `true` if `sq` is reachable by any piece of `by_color`.
pub fn is_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    board
        .occupants()
        .filter(|(_, p)| p.is(by_color))
        .any(|(from, p)| legal_destinations(p.kind(), by_color, from, board).contains(sq))
}

/// Return `true` if `color`'s king is attacked, optionally after playing
/// `hypothetical` (from, to) on a scratch copy of `board`.
///
/// # Errors
///
/// [`ChessError::KingNotFound`] if `color` has no king on the resulting board.
pub fn is_in_check(
    color: Color,
    board: &Board,
    hypothetical: Option<(Square, Square)>,
) -> Result<bool, ChessError> {
    let scratch = match hypothetical {
        Some((from, to)) => board.with_move(from, to),
        None => *board,
    };
    let king = scratch.king_square(color)?;
    let attacked = is_attacked(&scratch, king, color.flip());
    trace!(%color, %king, ?hypothetical, attacked, "check evaluated");
    Ok(attacked)
}

/// Verify that `color` may castle toward `side`.
///
/// Preconditions are tested in order and the first failure is returned:
/// unmoved king and rook, both on their home squares, an empty path between
/// them, king not in check, crossing square not attacked, landing square not
/// attacked.
///
/// # Errors
///
/// [`ChessError::CastlingIneligible`] with the failed precondition, or
/// [`ChessError::KingNotFound`] for a board with no king of `color`.
pub fn check_castle_eligible(
    color: Color,
    side: CastleSide,
    board: &Board,
    rights: CastlingRights,
) -> Result<(), ChessError> {
    let refuse = |reason| ChessError::CastlingIneligible {
        color,
        side,
        reason,
    };

    if !rights.may_castle(color, side) {
        return Err(refuse(CastleBlock::AlreadyMoved));
    }

    let king_from = CastleSide::king_origin(color);
    if board.piece_at(king_from) != Some(Piece::new(PieceKind::King, color))
        || board.piece_at(side.rook_origin(color)) != Some(Piece::new(PieceKind::Rook, color))
    {
        return Err(refuse(CastleBlock::PieceMissing));
    }

    let occupied = board.occupied();
    if side.between(color).any(|sq| occupied.contains(sq)) {
        return Err(refuse(CastleBlock::PathOccupied));
    }

    if is_in_check(color, board, None)? {
        return Err(refuse(CastleBlock::KingInCheck));
    }

    if is_in_check(color, board, Some((king_from, side.crossing(color))))? {
        return Err(refuse(CastleBlock::PathAttacked));
    }

    if is_in_check(color, &board.with_castle(color, side), None)? {
        return Err(refuse(CastleBlock::DestinationAttacked));
    }

    Ok(())
}
