//! Move execution via copy-make.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::square::Square;

impl Board {
    /// Return a copy with the occupant of `from` relocated to `to`.
    ///
    /// Copy-make: `self` is not modified. Whatever stood on `to` is replaced
    /// (a capture). Moving from an empty square returns an unchanged copy.
    #[must_use]
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut b = *self;
        if let Some(piece) = b.piece_at(from) {
            b.set(from, None);
            b.set(to, Some(piece));
        }
        b
    }

    /// Return a copy with `color`'s king and `side` rook in their castled
    /// positions. Does not check eligibility.
    #[must_use]
    pub fn with_castle(&self, color: Color, side: CastleSide) -> Board {
        self.with_move(CastleSide::king_origin(color), side.king_target(color))
            .with_move(side.rook_origin(color), side.crossing(color))
    }
}
