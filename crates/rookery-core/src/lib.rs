//! Core chess rules: board representation, move generation, check detection,
//! castling and turn-taking move application.

mod board;
mod castle_rights;
mod catalog;
mod check;
mod chess_move;
mod color;
mod error;
mod game;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod square;
mod square_set;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleSide, CastlingRights};
pub use catalog::{Direction, Movement, movement};
pub use check::{check_castle_eligible, is_attacked, is_in_check};
pub use chess_move::{MoveKind, MoveRecord};
pub use color::Color;
pub use error::{CastleBlock, ChessError, PlacementError};
pub use game::Game;
pub use movegen::{legal_destinations, legal_destinations_from};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use square::Square;
pub use square_set::SquareSet;
