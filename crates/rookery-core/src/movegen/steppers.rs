//! Stepping piece (knight, king) destinations.

use crate::board::Board;
use crate::catalog::Direction;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Take each step once; keep on-board squares that are empty or hold an opponent.
pub(super) fn step_destinations(
    dirs: &[Direction],
    color: Color,
    from: Square,
    board: &Board,
) -> SquareSet {
    dirs.iter()
        .filter_map(|&dir| from.step(dir))
        .filter(|&to| !board.is_occupied_by(to, color))
        .collect()
}
