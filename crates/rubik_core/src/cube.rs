use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Color, CubeError, Layer, PerLayer};

/// Returns the number of stickers on each face of a cube of the given size,
/// or `None` if it overflows.
pub(crate) fn face_len(size: usize) -> Option<usize> {
    size.checked_mul(size)
}

/// Sticker state of an NxNxN cube.
///
/// Each face is stored row-major as seen when looking directly at it, so the
/// sticker at `(row, col)` has index `row * size + col`. Only the functions in
/// [`crate::rotation`] mutate a cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    faces: PerLayer<Vec<Color>>,
}

impl Cube {
    /// Constructs a solved cube of the given size.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        let len = face_len(size)
            .filter(|_| size >= 2)
            .ok_or(CubeError::InvalidSize(size))?;
        let faces = PerLayer::from_fn(|layer| vec![layer.solved_color(); len]);
        Ok(Self { size, faces })
    }

    /// Constructs a cube from explicit face buffers.
    ///
    /// The buffers are not checked, so that stickers read from an external
    /// source (such as a color scanner) can be handed to
    /// [`crate::Validator`] as-is. Turning a malformed cube fails with an
    /// error.
    pub fn from_faces(size: usize, faces: PerLayer<Vec<Color>>) -> Self {
        Self { size, faces }
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the stickers of one face.
    pub fn face(&self, layer: Layer) -> &[Color] {
        &self.faces[layer]
    }
    pub(crate) fn face_mut(&mut self, layer: Layer) -> &mut Vec<Color> {
        &mut self.faces[layer]
    }

    /// Returns the stickers of every face.
    pub fn faces(&self) -> &PerLayer<Vec<Color>> {
        &self.faces
    }

    /// Returns the sticker at `index` on a face, or `None` if it is out of
    /// range.
    pub fn sticker(&self, layer: Layer, index: usize) -> Option<Color> {
        self.faces[layer].get(index).copied()
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|(_, face)| face.iter().all_equal())
    }

    /// Returns an error if the size is less than 2 or any face does not have
    /// exactly `size²` stickers.
    pub fn check_well_formed(&self) -> Result<(), CubeError> {
        let expected = face_len(self.size)
            .filter(|_| self.size >= 2)
            .ok_or(CubeError::InvalidSize(self.size))?;
        for (layer, face) in self.faces.iter() {
            if face.len() != expected {
                return Err(CubeError::WrongStickerCount {
                    layer,
                    expected,
                    actual: face.len(),
                });
            }
        }
        Ok(())
    }

    /// Returns a serializable snapshot of the cube.
    pub fn state(&self) -> CubeState {
        CubeState {
            dimensions: self.size,
            state: self
                .faces
                .iter()
                .map(|(layer, face)| (layer, face.clone()))
                .collect(),
        }
    }

    fn row_string(&self, layer: Layer, row: usize) -> String {
        self.faces[layer]
            .iter()
            .skip(row.saturating_mul(self.size))
            .take(self.size)
            .join(" ")
    }
}

/// Prints the cube unfolded, with the `UP` and `DOWN` faces aligned above and
/// below `FRONT`:
///
/// ```text
///       W W W
///       W W W
///       W W W
/// O O O G G G R R R B B B
/// O O O G G G R R R B B B
/// O O O G G G R R R B B B
///       Y Y Y
///       Y Y Y
///       Y Y Y
/// ```
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = " ".repeat(self.size.saturating_mul(2));
        for row in 0..self.size {
            writeln!(f, "{pad}{}", self.row_string(Layer::Up, row))?;
        }
        for row in 0..self.size {
            let band = [Layer::Left, Layer::Front, Layer::Right, Layer::Back]
                .map(|layer| self.row_string(layer, row));
            writeln!(f, "{}", band.join(" "))?;
        }
        for row in 0..self.size {
            writeln!(f, "{pad}{}", self.row_string(Layer::Down, row))?;
        }
        Ok(())
    }
}

/// Serializable snapshot of a [`Cube`].
///
/// ```json
/// {"dimensions": 2, "state": {"UP": ["W", "W", "W", "W"], "DOWN": ...}}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    /// Number of layers along each axis.
    pub dimensions: usize,
    /// Stickers of each face, keyed by face name.
    pub state: IndexMap<Layer, Vec<Color>>,
}

impl TryFrom<CubeState> for Cube {
    type Error = CubeError;

    fn try_from(mut value: CubeState) -> Result<Self, Self::Error> {
        let mut faces = PerLayer::<Vec<Color>>::default();
        for layer in Layer::ALL {
            faces[layer] = value
                .state
                .shift_remove(&layer)
                .ok_or(CubeError::MissingLayer(layer))?;
        }
        Ok(Self::from_faces(value.dimensions, faces))
    }
}
