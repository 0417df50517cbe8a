use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rubik_core::{Cube, Direction, Layer, Move, Validator, rotation};

use crate::*;

#[test]
fn test_parse_move() {
    let cases = [
        ("R", Move::new(Layer::Right, Direction::Cw, 1)),
        ("U'", Move::new(Layer::Up, Direction::Ccw, 1)),
        ("F2", Move::new(Layer::Front, Direction::Double, 1)),
        ("B2'", Move::new(Layer::Back, Direction::Double, 1)),
        ("Dw", Move::new(Layer::Down, Direction::Cw, 2)),
        ("Lw'", Move::new(Layer::Left, Direction::Ccw, 2)),
        ("2Rw2", Move::new(Layer::Right, Direction::Double, 2)),
        ("3Uw'", Move::new(Layer::Up, Direction::Ccw, 3)),
        ("1Fw", Move::new(Layer::Front, Direction::Cw, 1)),
        ("12Bw", Move::new(Layer::Back, Direction::Cw, 12)),
    ];
    for (s, expected) in cases {
        assert_eq!(parse_move(s), Ok(expected), "parsing {s:?}");
    }
}

#[test]
fn test_parse_move_errors() {
    assert_eq!(parse_move(""), Err(ParseMoveError::Empty));
    assert_eq!(parse_move("3R"), Err(ParseMoveError::PrefixWithoutWide));
    assert_eq!(parse_move("0Rw"), Err(ParseMoveError::ZeroDepth));
    assert_eq!(
        parse_move("X"),
        Err(ParseMoveError::UnknownLayer("X".to_owned())),
    );
    assert_eq!(
        parse_move("r"),
        Err(ParseMoveError::UnknownLayer("r".to_owned())),
    );
    assert_eq!(
        parse_move("3"),
        Err(ParseMoveError::UnknownLayer(String::new())),
    );
    assert_eq!(
        parse_move("R3"),
        Err(ParseMoveError::InvalidSuffix("3".to_owned())),
    );
    assert_eq!(
        parse_move("Rww"),
        Err(ParseMoveError::InvalidSuffix("w".to_owned())),
    );
    assert!(matches!(
        parse_move("99999999999999999999999Rw"),
        Err(ParseMoveError::ParseInt(_)),
    ));
}

#[test]
fn test_parse_moves() {
    let moves = parse_moves("  R U'\tFw2\n3Lw ").unwrap();
    assert_eq!(format_moves(&moves), "R U' Fw2 3Lw");
    assert_eq!(parse_moves(""), Ok(vec![]));

    let err = parse_moves("R U Q2 F").unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.token, "Q2");
    assert_eq!(err.to_string(), r#"invalid move "Q2" at position 2"#);

    // The reason is reported once, as the error's source.
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some(r#"expected one of U, D, L, R, F, B; got "Q""#));
}

#[test]
fn test_zero_depth_display_does_not_parse() {
    let mv = Move::new(Layer::Right, Direction::Cw, 0);
    assert_eq!(mv.to_string(), "0Rw");
    assert_eq!(parse_move(&mv.to_string()), Err(ParseMoveError::ZeroDepth));
}

#[test]
fn test_golden_scramble() {
    let moves = parse_moves("U R' L2 F U2 B' D L' R2 F' U B2 D' L R' F2 U' B D2 L'").unwrap();
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|mv| mv.depth == 1));

    let mut cube = Cube::new(3).unwrap();
    rotation::turn_all(&mut cube, &moves).unwrap();
    let labels = |layer| cube.face(layer).iter().map(|c| c.label()).collect::<String>();
    assert_eq!(labels(Layer::Up), "RYBOWYORW");
    assert_eq!(labels(Layer::Front), "WWRGGOGYR");
    assert!(Validator::new(&cube).validate().is_valid);
}

fn arb_move() -> impl Strategy<Value = Move> {
    (
        prop::sample::select(Layer::ALL.to_vec()),
        prop::sample::select(vec![Direction::Cw, Direction::Ccw, Direction::Double]),
        1_usize..=20,
    )
        .prop_map(|(layer, direction, depth)| Move::new(layer, direction, depth))
}

proptest! {
    #[test]
    fn proptest_notation_round_trip(moves in prop::collection::vec(arb_move(), 0..10)) {
        let s = format_moves(&moves);
        prop_assert_eq!(parse_moves(&s), Ok(moves));
    }

    #[test]
    fn proptest_parse_move_no_panic(s in "[0-9]{0,3}[UDLRFBXw]{0,2}['2w]{0,3}") {
        let _ = parse_move(&s);
    }
}
