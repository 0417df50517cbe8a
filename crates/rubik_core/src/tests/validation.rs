use pretty_assertions::assert_eq;

use crate::{Check, CheckStatus, Color, Cube, Layer, PerLayer, Scrambler, Validator};

fn solved_faces(size: usize) -> PerLayer<Vec<Color>> {
    Cube::new(size).unwrap().faces().clone()
}

/// Recolors the three stickers of the UBL corner of a solved cube.
fn with_ubl_corner(size: usize, up: Color, left: Color, back: Color) -> Cube {
    let mut faces = solved_faces(size);
    faces[Layer::Up][0] = up;
    faces[Layer::Left][0] = left;
    faces[Layer::Back][size - 1] = back;
    Cube::from_faces(size, faces)
}

#[test]
fn test_twisted_corner_counter_clockwise() {
    // White moved from UP onto BACK.
    let cube = with_ubl_corner(3, Color::Orange, Color::Blue, Color::White);
    let report = Validator::new(&cube).validate();
    assert!(!report.is_valid);
    assert_eq!(
        report.status(Check::Corner),
        Some(&CheckStatus::Invalid(
            "Invalid corner orientation. Twist one corner piece counter-clockwise.".to_owned()
        )),
    );
    assert_eq!(report.status(Check::Center), Some(&CheckStatus::Valid));
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_twisted_corner_clockwise() {
    // White moved from UP onto LEFT.
    let cube = with_ubl_corner(3, Color::Blue, Color::White, Color::Orange);
    assert_eq!(
        Validator::new(&cube).corner_check(),
        Err("Invalid corner orientation. Twist one corner piece clockwise.".to_owned()),
    );
}

#[test]
fn test_twisted_corner_even_cube() {
    for size in [2, 4, 6] {
        let cube = with_ubl_corner(size, Color::Orange, Color::Blue, Color::White);
        let report = Validator::new(&cube).validate();
        assert!(!report.is_valid);
        assert!(!report.status(Check::Corner).unwrap().is_valid());
    }
}

#[test]
fn test_scrambled_cubes_are_valid() {
    for size in 2..=7 {
        for seed in 0..10 {
            let scrambled = Scrambler::from_seed(seed).scramble(size).unwrap();
            let report = Validator::new(&scrambled.cube).validate();
            assert!(report.is_valid, "size {size} seed {seed}:\n{report}");
        }
    }
}

#[test]
fn test_swapped_centers() {
    let mut faces = solved_faces(5);
    faces[Layer::Left][12] = Color::Red;
    faces[Layer::Right][12] = Color::Orange;
    let cube = Cube::from_faces(5, faces);
    let report = Validator::new(&cube).validate();
    assert_eq!(
        report.failures().collect::<Vec<_>>(),
        [(Check::Center, "Invalid center piece on LEFT face.")],
    );
}

#[test]
fn test_report_display() {
    let cube = with_ubl_corner(2, Color::Blue, Color::White, Color::Orange);
    let report = Validator::new(&cube).validate();
    let expected = "\
layer_check: Valid
corner_check: Invalid corner orientation. Twist one corner piece clockwise.
center_check: Valid
edge_check: Valid
x_center_check: Valid
plus_center_check: Valid
parity_check: Valid
";
    assert_eq!(report.to_string(), expected);
}
