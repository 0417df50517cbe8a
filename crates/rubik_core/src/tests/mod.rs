use crate::{Color, Cube, Direction, Layer, Move, PerLayer};

mod validation;

/// Builds a cube from one string of color labels per face, in the order
/// `UP DOWN LEFT RIGHT FRONT BACK`.
fn cube_from_labels(size: usize, faces: [&str; 6]) -> Cube {
    let [up, down, left, right, front, back] = faces;
    let face = |s: &str| -> Vec<Color> {
        s.chars()
            .map(|c| Color::from_label(c).unwrap_or_else(|| panic!("bad color {c:?}")))
            .collect()
    };
    Cube::from_faces(
        size,
        PerLayer::from_fn(|layer| match layer {
            Layer::Up => face(up),
            Layer::Down => face(down),
            Layer::Left => face(left),
            Layer::Right => face(right),
            Layer::Front => face(front),
            Layer::Back => face(back),
        }),
    )
}

/// Reads simple space-separated single-layer notation such as `R U' F2`.
fn outer_moves(notation: &str) -> Vec<Move> {
    notation
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            let layer = chars.next().and_then(Layer::from_symbol).unwrap();
            let direction = match chars.as_str() {
                "" => Direction::Cw,
                "'" => Direction::Ccw,
                "2" => Direction::Double,
                s => panic!("bad suffix {s:?}"),
            };
            Move::new(layer, direction, 1)
        })
        .collect()
}
