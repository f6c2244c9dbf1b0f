//! A colored piece packed into one byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A board occupant: a [`PieceKind`] owned by a [`Color`].
///
/// Stored as `color * 6 + kind`, so the twelve pieces occupy `0..12`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color.index() * PieceKind::COUNT + kind.index()) as u8)
    }

    /// Parse a placement letter. Case selects the owner: `N` is a white
    /// knight, `n` a black one.
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let owner = match c.is_ascii_uppercase() {
            true => Color::White,
            false => Color::Black,
        };
        Some(Piece::new(kind, owner))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::ALL[self.0 as usize % PieceKind::COUNT]
    }

    #[inline]
    pub const fn color(self) -> Color {
        Color::ALL[self.0 as usize / PieceKind::COUNT]
    }

    /// Return `true` if this piece belongs to `color`.
    #[inline]
    pub fn is(self, color: Color) -> bool {
        self.color() == color
    }

    /// The letter drawn for this piece: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let letter = self.kind().symbol();
        if self.is(Color::White) {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({} {:?})", self.color(), self.kind())
    }
}
