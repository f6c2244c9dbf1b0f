//! Pawn destinations.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Forward pushes onto empty squares (two from the home rank when both are
/// empty) plus forward diagonals that hold an opponent.
///
/// Pawns never move backwards and never promote, so a pawn standing on its
/// home rank has not moved yet.
pub(super) fn pawn_destinations(color: Color, from: Square, board: &Board) -> SquareSet {
    let forward = color.forward();
    let mut targets = SquareSet::EMPTY;

    // --- Pushes ---
    if let Some(one) = from.offset(forward, 0)
        && !board.is_occupied(one)
    {
        targets.insert(one);
        if from.row() == color.pawn_rank()
            && let Some(two) = one.offset(forward, 0)
            && !board.is_occupied(two)
        {
            targets.insert(two);
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        if let Some(diag) = from.offset(forward, d_col)
            && board.is_occupied_by(diag, color.flip())
        {
            targets.insert(diag);
        }
    }

    targets
}
