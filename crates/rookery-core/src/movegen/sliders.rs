//! Sliding piece (bishop, rook, queen) destinations.

use crate::board::Board;
use crate::catalog::Direction;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Walk each direction from `from` until the edge or the first occupied
/// square; that square is included only if it holds an opponent.
pub(super) fn slide_destinations(
    dirs: &[Direction],
    color: Color,
    from: Square,
    board: &Board,
) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &dir in dirs {
        let mut cursor = from;
        while let Some(next) = cursor.step(dir) {
            match board.piece_at(next) {
                None => targets.insert(next),
                Some(piece) => {
                    if !piece.is(color) {
                        targets.insert(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::legal_destinations;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn set(squares: &[&str]) -> SquareSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn rook_stops_at_first_blocker() {
        // Own pawn on d6 (excluded), black knight on f4 (captured).
        let board: Board = "8/8/3P4/8/3R1n2/8/8/8".parse().unwrap();
        let dests = legal_destinations(PieceKind::Rook, Color::White, sq("d4"), &board);
        assert_eq!(
            dests,
            set(&["d5", "e4", "f4", "c4", "b4", "a4", "d3", "d2", "d1"])
        );
    }

    #[test]
    fn bishop_captures_but_does_not_pass() {
        let board: Board = "8/6p1/8/8/3B4/8/1P6/8".parse().unwrap();
        let dests = legal_destinations(PieceKind::Bishop, Color::White, sq("d4"), &board);
        assert!(dests.contains(sq("g7")));
        assert!(!dests.contains(sq("h8")));
        assert!(dests.contains(sq("c3")));
        assert!(!dests.contains(sq("b2")));
        assert!(!dests.contains(sq("a1")));
        assert_eq!(dests.count(), 10);
    }

    #[test]
    fn queen_combines_lines() {
        let board = Board::empty();
        let queen = legal_destinations(PieceKind::Queen, Color::Black, sq("d4"), &board);
        let rook = legal_destinations(PieceKind::Rook, Color::Black, sq("d4"), &board);
        let bishop = legal_destinations(PieceKind::Bishop, Color::Black, sq("d4"), &board);
        assert_eq!(queen, rook | bishop);
        assert_eq!(queen.count(), 27);
    }
}
