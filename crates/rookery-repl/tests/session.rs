//! Drive whole sessions through in-memory input and output.

use std::io::Cursor;

use rookery_core::{Color, Piece, Square};
use rookery_repl::Session;

fn play(input: &str) -> (Session, String) {
    let mut session = Session::new();
    let mut out = Vec::new();
    session.run(Cursor::new(input), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn scripted_opening_and_castle() {
    let script = "\
set autoshow off
e2 e4
e7e5
move g1 f3
b8 c6
f1 c4
g8 f6
O-O
history
quit
";
    let (session, out) = play(script);
    let game = session.game();
    assert_eq!(game.piece_at(Square::G1), Some(Piece::WHITE_KING));
    assert_eq!(game.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(out.contains("white castles O-O\n"));
    assert!(out.contains("1. e2e4 e7e5\n2. g1f3 b8c6\n3. f1c4 g8f6\n4. O-O\n"));
    assert!(!out.contains("error:"));
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let script = "\
set autoshow off
e7 e5
e2 e5
e2 z9
dance
e2 e4
turn
";
    let (session, out) = play(script);
    assert_eq!(session.game().history().len(), 1);
    assert_eq!(out.matches("error:").count(), 4);
    assert!(out.contains("error: unknown command: dance"));
    assert!(out.ends_with("black to move\n"));
}

#[test]
fn autoshow_prints_board_after_moves() {
    let (_, out) = play("d2 d4\n");
    // Once at start-up, once after the move.
    assert_eq!(out.matches("   a b c d e f g h").count(), 2);
    assert!(out.contains("4  . . . P . . . .\n"));
}

#[test]
fn check_is_announced() {
    let script = "\
set autoshow off
f2 f3
e7 e5
g2 g4
d8 h4
turn
";
    let (_, out) = play(script);
    assert!(out.contains("white is in check\n"));
    assert!(out.ends_with("white to move (in check)\n"));
}

#[test]
fn moves_query_lists_destinations() {
    let (_, out) = play("set autoshow off\nmoves g1\nmoves e4\n");
    assert!(out.contains("g1: f3 h3\n"));
    assert!(out.contains("e4: no moves\n"));
}

#[test]
fn new_game_resets_the_board() {
    let (session, out) = play("set autoshow off\ne2 e4\nnew\nturn\n");
    assert!(session.game().history().is_empty());
    assert!(out.contains("new game\n"));
    assert!(out.ends_with("white to move\n"));
}

#[test]
fn input_after_quit_is_ignored() {
    let (session, _) = play("quit\ne2 e4\n");
    assert!(session.game().history().is_empty());
}
