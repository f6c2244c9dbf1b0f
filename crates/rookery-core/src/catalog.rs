//! Movement geometry for every piece kind, independent of board state.

use crate::piece_kind::PieceKind;

/// A unit step on the board, as (row delta, column delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    const fn new(d_row: i8, d_col: i8) -> Direction {
        Direction { d_row, d_col }
    }
}

/// How a piece travels along its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Repeat each direction until the edge or the first occupied square.
    Sliding(&'static [Direction]),
    /// Take each direction exactly once.
    Stepping(&'static [Direction]),
    /// Color-dependent forward pushes and diagonal captures.
    Pawn,
}

pub const ORTHOGONAL: [Direction; 4] = [
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(0, -1),
];

pub const DIAGONAL: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

pub const ALL_LINES: [Direction; 8] = [
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

pub const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(-2, 1),
    Direction::new(-2, -1),
    Direction::new(1, 2),
    Direction::new(1, -2),
    Direction::new(-1, 2),
    Direction::new(-1, -2),
];

/// Return the movement mode and direction table for `kind`.
pub const fn movement(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::Pawn => Movement::Pawn,
        PieceKind::Knight => Movement::Stepping(&KNIGHT_JUMPS),
        PieceKind::Bishop => Movement::Sliding(&DIAGONAL),
        PieceKind::Rook => Movement::Sliding(&ORTHOGONAL),
        PieceKind::Queen => Movement::Sliding(&ALL_LINES),
        PieceKind::King => Movement::Stepping(&ALL_LINES),
    }
}
