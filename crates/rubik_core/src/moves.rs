use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Direction, Layer};

/// Turn of one or more outer layers of a cube.
///
/// `depth` counts layers inward from `layer`, so a move with depth 2 turns the
/// outer layer together with the one behind it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face whose layers are turned.
    pub layer: Layer,
    /// Direction of the turn, as seen looking at `layer`.
    pub direction: Direction,
    /// Number of layers turned, counted from `layer`.
    pub depth: usize,
}

impl Move {
    /// Constructs a move.
    pub fn new(layer: Layer, direction: Direction, depth: usize) -> Self {
        Self {
            layer,
            direction,
            depth,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }
}

/// Formats the move in extended Singmaster notation: `R`, `U'`, `Fw2`,
/// `3Lw'`.
///
/// Depth 0 has no notation of its own and is written with an explicit prefix
/// (`0Rw`), so that it never reads back as a depth-1 move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            layer,
            direction,
            depth,
        } = *self;
        let suffix = direction.suffix();
        match depth {
            1 => write!(f, "{layer}{suffix}"),
            2 => write!(f, "{layer}w{suffix}"),
            _ => write!(f, "{depth}{layer}w{suffix}"),
        }
    }
}
