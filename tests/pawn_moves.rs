use pawns_only_chess::core::color::Color;
use pawns_only_chess::core::square::Square;
use pawns_only_chess::game::board::{Board, Cell};
use pawns_only_chess::game::engine::{BoardEngine, MoveKind};
use pawns_only_chess::game::error::MoveError;
use pawns_only_chess::game::mv::Move;

fn sq(name: &str) -> Square {
    Square::from_name(name.as_bytes()).unwrap()
}

fn mv(raw: &str) -> Move {
    Move::parse(raw).unwrap()
}

fn position(white: &[&str], black: &[&str]) -> BoardEngine {
    let mut board = Board::empty();
    for s in white {
        board.set(sq(s), Cell::Pawn(Color::White));
    }
    for s in black {
        board.set(sq(s), Cell::Pawn(Color::Black));
    }
    BoardEngine::from_position(board, None)
}

/// Every destination `color` may legally reach from `from`, in square order.
fn targets(engine: &BoardEngine, from: &str, color: Color) -> Vec<String> {
    Square::all()
        .filter(|&to| engine.is_legal_move(Move::new(sq(from), to), color))
        .map(|to| to.to_string())
        .collect()
}

#[test]
fn two_square_advance_only_from_home_rank() {
    let start = BoardEngine::new();
    assert!(start.is_forward_advance(mv("e2e4"), Color::White));
    assert!(start.is_forward_advance(mv("e2e3"), Color::White));
    assert!(start.is_forward_advance(mv("e7e5"), Color::Black));
    assert!(!start.is_forward_advance(mv("e2e5"), Color::White));

    let e = position(&["e3"], &["a7"]);
    assert!(!e.is_legal_move(mv("e3e5"), Color::White));
    assert!(e.is_legal_move(mv("e3e4"), Color::White));

    let e = position(&["a2"], &["e6"]);
    assert!(!e.is_legal_move(mv("e6e4"), Color::Black));
}

#[test]
fn two_square_advance_needs_both_squares_empty() {
    // Blocked on the intermediate square.
    let e = position(&["e2"], &["e3"]);
    assert!(!e.is_legal_move(mv("e2e4"), Color::White));
    assert!(!e.is_legal_move(mv("e2e3"), Color::White));

    // Blocked on the destination.
    let e = position(&["e2"], &["e4"]);
    assert!(!e.is_legal_move(mv("e2e4"), Color::White));
    assert!(e.is_legal_move(mv("e2e3"), Color::White));

    let e = position(&["d6"], &["d7"]);
    assert!(!e.is_legal_move(mv("d7d5"), Color::Black));
}

#[test]
fn pawns_never_move_back_or_sideways() {
    let e = position(&["e4"], &["d5"]);
    for raw in ["e4e3", "e4d4", "e4f4", "e4e4", "e4d3", "e4e6"] {
        assert!(!e.is_legal_move(mv(raw), Color::White), "{raw}");
    }
    for raw in ["d5d6", "d5c5", "d5e6", "d5d3"] {
        assert!(!e.is_legal_move(mv(raw), Color::Black), "{raw}");
    }
}

#[test]
fn diagonal_capture_needs_an_enemy_pawn() {
    let e = position(&["e4", "f5"], &["d5", "e3"]);
    assert!(e.is_diagonal_capture(mv("e4d5"), Color::White));
    assert!(!e.is_diagonal_capture(mv("e4f5"), Color::White));
    // Backwards onto an enemy pawn is not a capture.
    assert!(!e.is_diagonal_capture(mv("e4e3"), Color::White));
    assert!(!e.is_legal_move(mv("f5e4"), Color::White));

    assert!(e.is_diagonal_capture(mv("d5e4"), Color::Black));
    assert_eq!(e.classify(mv("d5e4"), Color::Black), MoveKind::Capture);
}

#[test]
fn edge_files_capture_inwards_only() {
    // Enemy pawns on every square a wrapped index could hit.
    let e = position(&["a2", "h2"], &["b3", "g3", "h3", "a3", "h1"]);
    assert_eq!(targets(&e, "a2", Color::White), vec!["b3"]);
    assert_eq!(targets(&e, "h2", Color::White), vec!["g3"]);

    let e = position(&["b6", "g6", "h6"], &["a7", "h7"]);
    assert_eq!(targets(&e, "a7", Color::Black), vec!["a5", "a6", "b6"]);
    assert_eq!(targets(&e, "h7", Color::Black), vec!["g6"]);
}

#[test]
fn opening_moves_from_start() {
    let e = BoardEngine::new();
    assert_eq!(targets(&e, "e2", Color::White), vec!["e3", "e4"]);
    assert_eq!(targets(&e, "a7", Color::Black), vec!["a5", "a6"]);
    // Wrong colour at the origin is never legal.
    assert!(targets(&e, "e2", Color::Black).is_empty());
}

#[test]
fn origin_must_hold_own_pawn() {
    let mut e = BoardEngine::new();
    assert_eq!(e.check_origin_occupancy(mv("e2e4"), Color::White), Ok(()));
    assert_eq!(
        e.check_origin_occupancy(mv("e3e4"), Color::White),
        Err(MoveError::NoPawnAt {
            color: Color::White,
            square: sq("e3")
        })
    );

    let before = e.clone();
    let err = e.try_move(mv("e2e4"), Color::Black).unwrap_err();
    assert_eq!(err.to_string(), "No black pawn at e2");
    let err = e.try_move(mv("e7e5"), Color::White).unwrap_err();
    assert_eq!(err.to_string(), "No white pawn at e7");
    assert_eq!(e, before);
}

#[test]
fn illegal_but_well_formed_is_rejected_without_change() {
    let mut e = BoardEngine::new();
    let before = e.clone();
    assert_eq!(e.try_move(mv("e2e5"), Color::White), Err(MoveError::Illegal));
    assert_eq!(e.try_move(mv("e2d3"), Color::White), Err(MoveError::Illegal));
    assert_eq!(e, before);
    assert_eq!(e.last_move(), None);
}

#[test]
fn malformed_strings_never_parse() {
    let e = BoardEngine::new();
    for raw in ["", "e2", "e2e4e", "E2E4", "e2 e4", "i2i4", "e0e1", "exit", "e2e9", "a1-h8"] {
        assert_eq!(e.parse_move(raw), Err(MoveError::Malformed), "{raw:?}");
    }
    assert_eq!(e.parse_move("e2e4"), Ok(mv("e2e4")));
}

#[test]
fn applying_relocates_exactly_one_pawn() {
    let mut e = BoardEngine::new();
    let before = e.board().clone();
    assert_eq!(e.apply_move(mv("e2e4"), Color::White), MoveKind::Advance);
    assert_eq!(e.last_move(), Some(mv("e2e4")));

    let changed: Vec<String> = Square::all()
        .filter(|&s| e.board().get(s) != before.get(s))
        .map(|s| s.to_string())
        .collect();
    assert_eq!(changed, vec!["e2", "e4"]);
    assert_eq!(e.board().get(sq("e4")), Cell::Pawn(Color::White));
    assert!(e.board().get(sq("e2")).is_empty());

    // The rendered grids differ in exactly those two cells.
    let diff = before
        .render()
        .chars()
        .zip(e.render().chars())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(diff, 2);
}

#[test]
fn capture_removes_the_captured_pawn() {
    let mut e = position(&["e4", "a2"], &["d5", "h7"]);
    assert_eq!(e.try_move(mv("e4d5"), Color::White), Ok(MoveKind::Capture));
    assert_eq!(e.pawn_count(Color::Black), 1);
    assert_eq!(e.board().get(sq("d5")), Cell::Pawn(Color::White));
    assert!(e.board().get(sq("e4")).is_empty());
}
