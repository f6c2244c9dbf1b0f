//! Castling sides and the "has moved" flags that gate castling.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ChessError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Castling keyword: `O-O` or `O-O-O`.
    pub const fn token(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }

    /// Column the rook starts on.
    const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column delta of the king's travel (+1 kingside, -1 queenside).
    const fn toward(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// The home square of `color`'s king.
    pub const fn king_origin(color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// The corner the castling rook starts on.
    pub const fn rook_origin(self, color: Color) -> Square {
        match Square::new(color.back_rank(), self.rook_col()) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// The square the king crosses: f-file kingside, d-file queenside. The
    /// rook ends up here.
    pub const fn crossing(self, color: Color) -> Square {
        match king_origin_offset(color, self.toward()) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// The square the king lands on: g-file kingside, c-file queenside.
    pub const fn king_target(self, color: Color) -> Square {
        match king_origin_offset(color, 2 * self.toward()) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// The squares strictly between king and rook, which must be empty.
    pub fn between(self, color: Color) -> impl Iterator<Item = Square> {
        let king_col = CastleSide::king_origin(color).col();
        let rook_col = self.rook_col();
        let (lo, hi) = if king_col < rook_col {
            (king_col, rook_col)
        } else {
            (rook_col, king_col)
        };
        let row = color.back_rank();
        (lo + 1..hi).filter_map(move |col| Square::new(row, col))
    }
}

const fn king_origin_offset(color: Color, d_col: i8) -> Option<Square> {
    CastleSide::king_origin(color).offset(0, d_col)
}

impl FromStr for CastleSide {
    type Err = ChessError;

    /// Parse `O-O` or `O-O-O`. A zero (`0-0`) is accepted in place of the letter.
    fn from_str(s: &str) -> Result<CastleSide, ChessError> {
        match s.replace('0', "O").as_str() {
            "O-O" => Ok(CastleSide::KingSide),
            "O-O-O" => Ok(CastleSide::QueenSide),
            _ => Err(ChessError::InvalidNotation {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => f.write_str("kingside"),
            CastleSide::QueenSide => f.write_str("queenside"),
        }
    }
}

/// "Has moved" flags for each king and castling rook, one bit each.
///
/// Bit layout per color (White in bits 0-2, Black in bits 3-5):
/// king moved, kingside rook moved, queenside rook moved.
/// Flags are only ever set; a king that returns home stays marked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    const KING: u8 = 0b001;
    const KINGSIDE_ROOK: u8 = 0b010;
    const QUEENSIDE_ROOK: u8 = 0b100;

    /// Nothing has moved yet.
    pub const FRESH: CastlingRights = CastlingRights(0);

    #[inline]
    const fn shift(color: Color) -> u8 {
        color.index() as u8 * 3
    }

    #[inline]
    const fn rook_bit(side: CastleSide) -> u8 {
        match side {
            CastleSide::KingSide => Self::KINGSIDE_ROOK,
            CastleSide::QueenSide => Self::QUEENSIDE_ROOK,
        }
    }

    /// Return `true` if `color`'s king has moved.
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & (Self::KING << Self::shift(color)) != 0
    }

    /// Return `true` if `color`'s rook on `side` has moved.
    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & (Self::rook_bit(side) << Self::shift(color)) != 0
    }

    /// Return `true` if neither the king nor the `side` rook has moved.
    #[inline]
    pub const fn may_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Mark `color`'s king as moved.
    #[inline]
    pub fn mark_king(&mut self, color: Color) {
        self.0 |= Self::KING << Self::shift(color);
    }

    /// Mark `color`'s `side` rook as moved.
    #[inline]
    pub fn mark_rook(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(side) << Self::shift(color);
    }

    /// Record a move from `from` to `to`. Leaving a king or rook home square
    /// sets the matching flag, and so does landing on one: a capture there
    /// removes the original rook, and whatever arrives later is not it.
    pub fn record_move(&mut self, from: Square, to: Square) {
        for color in Color::ALL {
            if from == CastleSide::king_origin(color) {
                self.mark_king(color);
            }
            for side in CastleSide::ALL {
                let home = side.rook_origin(color);
                if from == home || to == home {
                    self.mark_rook(color, side);
                }
            }
        }
    }
}

impl fmt::Debug for CastlingRights {
    /// Lists the sides still allowed to castle, FEN-style (`KQkq`, `-` for none).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(4);
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self.may_castle(color, side) {
                    let c = match side {
                        CastleSide::KingSide => 'k',
                        CastleSide::QueenSide => 'q',
                    };
                    s.push(match color {
                        Color::White => c.to_ascii_uppercase(),
                        Color::Black => c,
                    });
                }
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        write!(f, "CastlingRights({s})")
    }
}
