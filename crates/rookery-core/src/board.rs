//! The chess board: an 8x8 grid of optional occupants.

use std::fmt;

use crate::color::Color;
use crate::error::ChessError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement snapshot, indexed by [`Square::index()`].
///
/// `Board` is `Copy`: move simulation works on a scratch copy and never
/// touches the original.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(sq) = Square::new(color.back_rank(), col) {
                    board.set(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::new(color.pawn_rank(), col) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    /// Return the occupant of `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return `true` if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.is(color))
    }

    /// Put `piece` on `sq`, replacing whatever stood there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Iterate over occupied squares and their occupants in index order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// All squares holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> SquareSet {
        self.occupants()
            .filter(|(_, p)| p.is(color))
            .map(|(sq, _)| sq)
            .collect()
    }

    /// All squares occupied by the color opposite `color`.
    #[inline]
    pub fn opponent_squares(&self, color: Color) -> SquareSet {
        self.pieces_of(color.flip())
    }

    /// All occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.pieces_of(Color::White) | self.pieces_of(Color::Black)
    }

    /// Return the square of `color`'s king.
    ///
    /// # Errors
    ///
    /// [`ChessError::KingNotFound`] if no such king is on the board.
    pub fn king_square(&self, color: Color) -> Result<Square, ChessError> {
        let king = Piece::new(PieceKind::King, color);
        self.occupants()
            .find(|&(_, p)| p == king)
            .map(|(sq, _)| sq)
            .ok_or(ChessError::KingNotFound { color })
    }

    /// Return a pretty-printable wrapper, White at the bottom.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            perspective: Color::White,
        }
    }

    /// Return a pretty-printable wrapper with `perspective`'s pieces at the bottom.
    pub fn pretty_from(&self, perspective: Color) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            perspective,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
///
/// White pieces are uppercase, Black pieces lowercase, empty squares `.`.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    perspective: Color,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols): (Vec<u8>, Vec<u8>) = match self.perspective {
            Color::White => ((0..8).rev().collect(), (0..8).collect()),
            Color::Black => ((0..8).collect(), (0..8).rev().collect()),
        };
        for &row in &rows {
            write!(f, "{}  ", row + 1)?;
            for (i, &col) in cols.iter().enumerate() {
                let c = Square::new(row, col)
                    .and_then(|sq| self.board.piece_at(sq))
                    .map_or('.', Piece::symbol);
                if i < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        let files: Vec<String> = cols
            .iter()
            .map(|&col| char::from(b'a' + col).to_string())
            .collect();
        write!(f, "   {}", files.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::ChessError;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(Square::B8), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.piece_at(Square::F8), Some(Piece::BLACK_BISHOP));
        assert_eq!(board.piece_at(sq("e2")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Ok(Square::E1));
        assert_eq!(board.king_square(Color::Black), Ok(Square::E8));
    }

    #[test]
    fn king_square_missing() {
        let board = Board::empty();
        assert_eq!(
            board.king_square(Color::Black),
            Err(ChessError::KingNotFound {
                color: Color::Black
            })
        );
    }

    #[test]
    fn opponent_squares() {
        let board = Board::starting_position();
        let black = board.opponent_squares(Color::White);
        assert_eq!(black.count(), 16);
        assert!(black.contains(Square::E8));
        assert!(black.contains(sq("a7")));
        assert!(!black.contains(Square::E1));
        assert_eq!(board.opponent_squares(Color::Black), board.pieces_of(Color::White));
    }

    #[test]
    fn set_replaces_occupant() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::WHITE_QUEEN));
        assert!(board.is_occupied_by(sq("d4"), Color::White));
        board.set(sq("d4"), Some(Piece::BLACK_PAWN));
        assert!(board.is_occupied_by(sq("d4"), Color::Black));
        board.set(sq("d4"), None);
        assert!(!board.is_occupied(sq("d4")));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn pretty_print_flipped() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty_from(Color::Black));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "1  R N B K Q B N R");
        assert_eq!(lines[7], "8  r n b k q b n r");
        assert_eq!(lines[8], "   h g f e d c b a");
    }
}
