//! Turning layers of a cube.
//!
//! A turn has two parts: the stickers on the turned face are permuted by
//! [`rotate_face()`], and the bands on the four neighboring faces are cycled
//! by [`rotate_sides()`]. [`turn()`] does both and is the only way to mutate a
//! [`Cube`].

mod face;
mod side;

pub use face::{rotate_face, rotation_map};
pub use side::{adjacent_edges, get_edge, rotate_sides, set_edge, should_flip_edge};

use crate::{Cube, CubeError, Move};

/// Applies a move to a cube.
///
/// The cube and the move are checked before anything is mutated, so on error
/// the cube is left unchanged.
pub fn turn(cube: &mut Cube, mv: Move) -> Result<(), CubeError> {
    cube.check_well_formed()?;
    let size = cube.size();
    if mv.depth == 0 {
        return Err(CubeError::InvalidDepth(mv.depth));
    }
    if size / mv.depth < 2 {
        return Err(CubeError::TooManyLayers {
            size,
            depth: mv.depth,
        });
    }

    log::trace!("turning {mv} on {size}x{size}x{size}");

    let rotated = rotate_face(cube.face(mv.layer), size, mv.direction)?;
    *cube.face_mut(mv.layer) = rotated;
    rotate_sides(cube, mv.layer, mv.direction, mv.depth)
}

/// Applies a sequence of moves to a cube, stopping at the first error.
///
/// Moves before the one that failed remain applied.
pub fn turn_all<'a>(
    cube: &mut Cube,
    moves: impl IntoIterator<Item = &'a Move>,
) -> Result<(), CubeError> {
    moves.into_iter().try_for_each(|&mv| turn(cube, mv))
}
