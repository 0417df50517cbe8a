//! Permutation of the stickers on the turned face itself.

use crate::cube::face_len;
use crate::{CubeError, Direction};

/// Returns the permutation `π` that a turn applies to an `N×N` face, such
/// that the sticker at index `i` moves to index `π[i]`.
pub fn rotation_map(size: usize, direction: Direction) -> Vec<usize> {
    let n = size;
    (0..n * n)
        .map(|i| {
            let (row, col) = (i / n, i % n);
            match direction {
                Direction::Cw => col * n + (n - 1 - row),
                Direction::Ccw => (n - 1 - col) * n + row,
                Direction::Double => n * n - 1 - i,
            }
        })
        .collect()
}

/// Returns a new face buffer with the stickers of `face` permuted by a turn.
///
/// Returns an error if `size` is zero or `face` does not have `size²`
/// stickers.
pub fn rotate_face<T: Copy>(
    face: &[T],
    size: usize,
    direction: Direction,
) -> Result<Vec<T>, CubeError> {
    let expected = face_len(size)
        .filter(|_| size > 0)
        .ok_or(CubeError::InvalidSize(size))?;
    if face.len() != expected {
        return Err(CubeError::WrongFaceLength {
            expected,
            actual: face.len(),
        });
    }

    let mut ret = face.to_vec();
    for (&sticker, dest) in std::iter::zip(face, rotation_map(size, direction)) {
        ret[dest] = sticker;
    }
    Ok(ret)
}
