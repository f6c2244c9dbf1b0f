//! Entries of the game history.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::square::Square;

/// The category of a recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A single piece moved (possibly capturing).
    Normal,
    /// King and rook castled toward the given side.
    Castle(CastleSide),
}

/// One played move. For castling, `from`/`to` are the king's squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl MoveRecord {
    /// A normal move.
    pub const fn new(from: Square, to: Square) -> MoveRecord {
        MoveRecord {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// A castling move given by the king's travel.
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> MoveRecord {
        MoveRecord {
            from,
            to,
            kind: MoveKind::Castle(side),
        }
    }

    /// Return `true` for castling records.
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }
}

impl fmt::Display for MoveRecord {
    /// `e2e4` for normal moves, `O-O` / `O-O-O` for castling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Normal => write!(f, "{}{}", self.from, self.to),
            MoveKind::Castle(side) => f.write_str(side.token()),
        }
    }
}
