use thiserror::Error;

use crate::Layer;

/// Invalid argument passed to the cube engine.
///
/// These always indicate a programming or input error on the caller's side.
/// A cube that is merely in an impossible state is not an error; see
/// [`crate::Validator`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Cube size out of range
    #[error("invalid cube size: {0}")]
    InvalidSize(usize),
    /// Layer depth out of range
    #[error("invalid layer amount: {0}")]
    InvalidDepth(usize),
    /// Wide turn consuming more than half the cube
    #[error("cube size {size} is too small to rotate {depth} layers")]
    TooManyLayers {
        /// Size of the cube.
        size: usize,
        /// Number of layers requested.
        depth: usize,
    },
    /// Face buffer with the wrong number of stickers
    #[error(
        "invalid number of stickers on layer {}: expected {expected}, got {actual}",
        .layer.name()
    )]
    WrongStickerCount {
        /// Face with the wrong sticker count.
        layer: Layer,
        /// `size²`
        expected: usize,
        /// Length of the face buffer.
        actual: usize,
    },
    /// Standalone face buffer with the wrong number of stickers
    #[error("invalid face length: expected {expected}, got {actual}")]
    WrongFaceLength {
        /// `size²`
        expected: usize,
        /// Length of the face buffer.
        actual: usize,
    },
    /// Edge band with the wrong number of stickers
    #[error("invalid edge length: expected {expected}, got {actual}")]
    WrongEdgeLength {
        /// Size of the cube.
        expected: usize,
        /// Length of the supplied band.
        actual: usize,
    },
    /// Cube state with a face missing
    #[error("missing layer {}", .0.name())]
    MissingLayer(Layer),
}
