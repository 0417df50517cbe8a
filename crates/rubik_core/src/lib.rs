//! Rotation engine and state validator for NxNxN Rubik's cubes.
//!
//! A [`Cube`] is a set of six sticker arrays. [`rotation::turn()`] applies a
//! [`Move`] to it, [`Scrambler`] generates random move sequences, and
//! [`Validator`] checks whether a sticker configuration could have been
//! reached from a solved cube.
//!
//! ```
//! use rubik_core::prelude::*;
//!
//! let mut cube = Cube::new(3)?;
//! rotation::turn(&mut cube, Move::new(Layer::Right, Direction::Cw, 1))?;
//! assert!(!cube.is_solved());
//! assert!(Validator::new(&cube).validate().is_valid);
//! # Ok::<(), CubeError>(())
//! ```

mod color;
mod cube;
mod error;
mod layer;
mod moves;
pub mod rotation;
pub mod scramble;
mod validation;

#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::color::{Color, ColorSet};
    pub use crate::cube::{Cube, CubeState};
    pub use crate::error::CubeError;
    pub use crate::layer::{Direction, EdgePosition, Layer, PerLayer};
    pub use crate::moves::Move;
    pub use crate::rotation;
    pub use crate::scramble::{ScrambledCube, Scrambler, scramble_length};
    pub use crate::validation::{Check, CheckStatus, ValidationReport, Validator};
}
