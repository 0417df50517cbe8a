use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::Color;

/// Face of the cube, and the outer layer that turns with it.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Layer {
    /// Top face.
    Up,
    /// Bottom face.
    Down,
    /// Left face.
    Left,
    /// Right face.
    Right,
    /// Face toward the viewer.
    Front,
    /// Face away from the viewer.
    Back,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Layer {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Every layer, in declaration order.
    pub const ALL: [Layer; Layer::COUNT] = [
        Layer::Up,
        Layer::Down,
        Layer::Left,
        Layer::Right,
        Layer::Front,
        Layer::Back,
    ];

    /// Returns the one-character notation symbol for the layer.
    pub fn symbol(self) -> char {
        match self {
            Layer::Up => 'U',
            Layer::Down => 'D',
            Layer::Left => 'L',
            Layer::Right => 'R',
            Layer::Front => 'F',
            Layer::Back => 'B',
        }
    }

    /// Returns the layer with the given notation symbol, or `None` if there is
    /// none.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::iter().find(|layer| layer.symbol() == symbol)
    }

    /// Returns the full uppercase name of the layer, such as `"UP"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns the layer on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Layer::Up => Layer::Down,
            Layer::Down => Layer::Up,
            Layer::Left => Layer::Right,
            Layer::Right => Layer::Left,
            Layer::Front => Layer::Back,
            Layer::Back => Layer::Front,
        }
    }

    /// Returns the color of every sticker on this face when the cube is
    /// solved.
    pub fn solved_color(self) -> Color {
        match self {
            Layer::Up => Color::White,
            Layer::Down => Color::Yellow,
            Layer::Left => Color::Orange,
            Layer::Right => Color::Red,
            Layer::Front => Color::Green,
            Layer::Back => Color::Blue,
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// Turn direction, as seen when looking directly at the turned face.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    /// Quarter turn clockwise.
    Cw,
    /// Quarter turn counterclockwise.
    Ccw,
    /// Half turn.
    Double,
}

impl Direction {
    /// Returns the notation suffix: empty for clockwise, `'` for
    /// counterclockwise, and `2` for a half turn.
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Cw => "",
            Direction::Ccw => "'",
            Direction::Double => "2",
        }
    }

    /// Returns the direction that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
            Direction::Double => Direction::Double,
        }
    }
}

/// Location of an edge band within a face's own row-major layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum EdgePosition {
    /// Row counted from the top of the face.
    Top,
    /// Row counted from the bottom of the face.
    Bottom,
    /// Column counted from the left of the face.
    Left,
    /// Column counted from the right of the face.
    Right,
}

/// Value for each [`Layer`], stored in a fixed array indexed by layer.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PerLayer<T>([T; Layer::COUNT]);

impl<T> PerLayer<T> {
    /// Constructs a `PerLayer` by calling `f` once for each layer.
    pub fn from_fn(mut f: impl FnMut(Layer) -> T) -> Self {
        Self(Layer::ALL.map(&mut f))
    }

    /// Returns an iterator over each layer and its value, in declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &T)> {
        Layer::ALL.into_iter().zip(&self.0)
    }

    /// Returns a new `PerLayer` with `f` applied to each value.
    pub fn map<U>(self, mut f: impl FnMut(Layer, T) -> U) -> PerLayer<U> {
        let [up, down, left, right, front, back] = self.0;
        PerLayer([
            f(Layer::Up, up),
            f(Layer::Down, down),
            f(Layer::Left, left),
            f(Layer::Right, right),
            f(Layer::Front, front),
            f(Layer::Back, back),
        ])
    }
}

impl<T> Index<Layer> for PerLayer<T> {
    type Output = T;

    fn index(&self, layer: Layer) -> &T {
        &self.0[layer.ordinal()]
    }
}

impl<T> IndexMut<Layer> for PerLayer<T> {
    fn index_mut(&mut self, layer: Layer) -> &mut T {
        &mut self.0[layer.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_names() {
        assert_eq!(Layer::Up.name(), "UP");
        assert_eq!(Layer::Back.name(), "BACK");
        assert_eq!(Layer::Right.to_string(), "R");
        for layer in Layer::iter() {
            assert_eq!(Some(layer), Layer::from_symbol(layer.symbol()));
            assert_eq!(layer, layer.opposite().opposite());
            assert_ne!(layer, layer.opposite());
        }
    }

    #[test]
    fn test_per_layer_order() {
        let per_layer = PerLayer::from_fn(Layer::symbol);
        let symbols: String = per_layer.iter().map(|(_, &c)| c).collect();
        assert_eq!(symbols, "UDLRFB");
        assert_eq!(per_layer[Layer::Front], 'F');
    }
}
