//! Board squares as (row, column) pairs packed into one byte.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Direction;
use crate::error::ChessError;

/// A square on the chess board.
///
/// Index = row * 8 + column, so a1 = (0, 0) = 0 and h8 = (7, 7) = 63.
/// Row 0 is White's back rank.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Squares on the board.
    pub const COUNT: usize = 64;

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Create a square from a row and column, returning `None` if either is
    /// outside 0..8.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// The square at `index`, which the caller guarantees is below 64.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation (e.g. "e2" → row 1, column 4).
    pub fn from_algebraic(s: &str) -> Result<Square, ChessError> {
        let invalid = || ChessError::InvalidNotation {
            input: s.to_string(),
        };
        let &[col_byte, row_byte] = s.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(&col_byte) || !(b'1'..=b'8').contains(&row_byte) {
            return Err(invalid());
        }
        Square::new(row_byte - b'1', col_byte - b'a').ok_or_else(invalid)
    }

    /// Index into a 64-entry table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = White's back rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0 = the a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Step by `(d_row, d_col)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square(row as u8 * 8 + col as u8))
        }
    }

    /// Step one unit along `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Option<Square> {
        self.offset(dir.d_row, dir.d_col)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Square, ChessError> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{file}{}", self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::ChessError;

    #[test]
    fn row_and_col() {
        let sq = Square::new(1, 4).unwrap();
        assert_eq!(sq.row(), 1);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 12);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!("e2".parse::<Square>().unwrap(), Square::new(1, 4).unwrap());
        assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
        assert_eq!(format!("{}", Square::E1), "e1");
        assert_eq!(format!("{}", Square::G8), "g8");
    }

    #[test]
    fn algebraic_invalid() {
        for input in ["i1", "a9", "a0", "", "a", "a1b", "E2", "11"] {
            assert!(
                matches!(
                    Square::from_algebraic(input),
                    Err(ChessError::InvalidNotation { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn notation_roundtrip_all_squares() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), sq, "roundtrip failed for {text}");
        }
    }

    #[test]
    fn offset_respects_edges() {
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::H8.offset(1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::E1.offset(1, 1), Square::new(1, 5));
        assert_eq!(Square::G1.offset(2, -1), Square::new(2, 5));
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E8), "Square(e8)");
    }
}
