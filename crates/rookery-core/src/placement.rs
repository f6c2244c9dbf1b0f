//! Piece-placement strings: the first field of a FEN record.
//!
//! Rows are listed from row 7 (Black's back rank) down to row 0, separated by
//! `/`. Letters are pieces (uppercase White, lowercase Black) and digits count
//! empty squares.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{ChessError, PlacementError};
use crate::piece::Piece;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Board, ChessError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() }.into());
        }

        let mut board = Board::empty();
        for (text, row) in rows.iter().zip((0u8..8).rev()) {
            let mut col: usize = 0;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece =
                    Piece::from_symbol(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let sq = u8::try_from(col)
                    .ok()
                    .and_then(|col| Square::new(row, col))
                    .ok_or(PlacementError::BadRowLength {
                        row,
                        length: col + 1,
                    })?;
                board.set(sq, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col }.into());
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            let mut empty_count = 0u8;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
