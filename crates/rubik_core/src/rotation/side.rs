//! Transfer of edge bands between the four faces adjacent to a turned layer.

use crate::cube::face_len;
use crate::{Color, Cube, CubeError, Direction, EdgePosition, Layer};

/// Returns the four bands adjacent to `layer`, in the cyclic order that a
/// clockwise turn of `layer` moves stickers through them.
///
/// A clockwise turn moves the band at index `i` into the band at index
/// `i + 1`.
pub fn adjacent_edges(layer: Layer) -> [(Layer, EdgePosition); 4] {
    use EdgePosition as E;
    use Layer as L;

    match layer {
        L::Up => [(L::Back, E::Top), (L::Right, E::Top), (L::Front, E::Top), (L::Left, E::Top)],
        L::Down => [
            (L::Front, E::Bottom),
            (L::Right, E::Bottom),
            (L::Back, E::Bottom),
            (L::Left, E::Bottom),
        ],
        L::Front => [(L::Up, E::Bottom), (L::Right, E::Left), (L::Down, E::Top), (L::Left, E::Right)],
        L::Back => [(L::Up, E::Top), (L::Left, E::Left), (L::Down, E::Bottom), (L::Right, E::Right)],
        L::Left => [(L::Up, E::Left), (L::Front, E::Left), (L::Down, E::Left), (L::Back, E::Right)],
        L::Right => [(L::Up, E::Right), (L::Back, E::Left), (L::Down, E::Right), (L::Front, E::Right)],
    }
}

fn edge_indices(
    actual_len: usize,
    depth: usize,
    position: EdgePosition,
    size: usize,
) -> Result<Vec<usize>, CubeError> {
    if depth == 0 {
        return Err(CubeError::InvalidDepth(depth));
    }
    let expected = face_len(size)
        .filter(|_| size > 0)
        .ok_or(CubeError::InvalidSize(size))?;
    if depth > size {
        return Err(CubeError::InvalidDepth(depth));
    }
    if actual_len != expected {
        return Err(CubeError::WrongFaceLength {
            expected,
            actual: actual_len,
        });
    }

    let n = size;
    Ok(match position {
        EdgePosition::Top => (n * (depth - 1)..n * depth).collect(),
        EdgePosition::Bottom => (n * (n - depth)..n * (n - depth + 1)).collect(),
        EdgePosition::Left => (0..n).map(|i| i * n + depth - 1).collect(),
        EdgePosition::Right => (0..n).map(|i| i * n + n - depth).collect(),
    })
}

/// Returns the band of `size` stickers at `depth` layers in from `position`.
///
/// Rows are read left to right and columns top to bottom, in the face's own
/// layout.
pub fn get_edge<T: Copy>(
    face: &[T],
    depth: usize,
    position: EdgePosition,
    size: usize,
) -> Result<Vec<T>, CubeError> {
    let indices = edge_indices(face.len(), depth, position, size)?;
    Ok(indices.into_iter().map(|i| face[i]).collect())
}

/// Overwrites the band that [`get_edge()`] reads with `values`.
pub fn set_edge<T: Copy>(
    face: &mut [T],
    depth: usize,
    position: EdgePosition,
    size: usize,
    values: &[T],
) -> Result<(), CubeError> {
    let indices = edge_indices(face.len(), depth, position, size)?;
    if values.len() != indices.len() {
        return Err(CubeError::WrongEdgeLength {
            expected: indices.len(),
            actual: values.len(),
        });
    }
    for (i, &value) in std::iter::zip(indices, values) {
        face[i] = value;
    }
    Ok(())
}

/// Returns whether the band written into `adjacent` must be reversed when
/// `turned` is turned in `direction`.
///
/// Unfolded, the faces around the `FRONT`, `BACK`, `LEFT`, and `RIGHT`
/// layers do not all read in the same rotational sense, so some bands change
/// reading order as they move. Bands around `UP` and `DOWN` never do.
pub fn should_flip_edge(turned: Layer, direction: Direction, adjacent: Layer) -> bool {
    use Direction as D;
    use Layer as L;

    let flipped: &[Layer] = match (turned, direction) {
        (L::Front, D::Cw) | (L::Back, D::Ccw) => &[L::Up, L::Down],
        (L::Front, D::Ccw) | (L::Back, D::Cw) => &[L::Left, L::Right],
        (L::Front | L::Back, D::Double) => &[L::Up, L::Down, L::Left, L::Right],

        (L::Left, D::Cw) | (L::Right, D::Ccw) => &[L::Up, L::Back],
        (L::Left, D::Ccw) | (L::Right, D::Cw) => &[L::Back, L::Down],
        (L::Left | L::Right, D::Double) => &[L::Front, L::Back],

        (L::Up | L::Down, _) => &[],
    };
    flipped.contains(&adjacent)
}

/// Cycles the edge bands around `layer` for each of the outer `depth` layers.
///
/// Returns an error if `depth` is zero or `size / depth < 2`.
pub fn rotate_sides(
    cube: &mut Cube,
    layer: Layer,
    direction: Direction,
    depth: usize,
) -> Result<(), CubeError> {
    let size = cube.size();
    if depth == 0 {
        return Err(CubeError::InvalidDepth(depth));
    }
    if size / depth < 2 {
        return Err(CubeError::TooManyLayers { size, depth });
    }

    let adjacent = adjacent_edges(layer);
    for d in 1..=depth {
        let mut bands: Vec<Vec<Color>> = adjacent
            .iter()
            .map(|&(face, position)| get_edge(cube.face(face), d, position, size))
            .collect::<Result<_, _>>()?;

        match direction {
            Direction::Cw => bands.rotate_right(1),
            Direction::Ccw => bands.rotate_left(1),
            Direction::Double => bands.rotate_left(2),
        }

        for (&(face, position), mut band) in std::iter::zip(&adjacent, bands) {
            if should_flip_edge(layer, direction, face) {
                band.reverse();
            }
            set_edge(cube.face_mut(face), d, position, size, &band)?;
        }
    }
    Ok(())
}
