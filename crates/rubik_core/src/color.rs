use std::fmt;

use bitflags::bitflags;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Sticker color.
///
/// Serialized as its one-character label, such as `"W"` for white.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Color {
    /// White, the solved color of [`crate::Layer::Up`].
    #[serde(rename = "W")]
    White,
    /// Yellow, the solved color of [`crate::Layer::Down`].
    #[serde(rename = "Y")]
    Yellow,
    /// Orange, the solved color of [`crate::Layer::Left`].
    #[serde(rename = "O")]
    Orange,
    /// Red, the solved color of [`crate::Layer::Right`].
    #[serde(rename = "R")]
    Red,
    /// Green, the solved color of [`crate::Layer::Front`].
    #[serde(rename = "G")]
    Green,
    /// Blue, the solved color of [`crate::Layer::Back`].
    #[serde(rename = "B")]
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Color {
    /// Returns the one-character label used when printing a cube.
    pub fn label(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Returns the color with the given label, or `None` if there is none.
    pub fn from_label(label: char) -> Option<Self> {
        Self::iter().find(|color| color.label() == label)
    }

    /// Returns whether this is one of the two colors that orient a corner
    /// (white or yellow).
    pub fn is_orienting(self) -> bool {
        matches!(self, Color::White | Color::Yellow)
    }
}

bitflags! {
    /// Unordered set of [`Color`]s, such as the colors of one corner piece.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ColorSet: u8 {
        /// White
        const WHITE = 1 << 0;
        /// Yellow
        const YELLOW = 1 << 1;
        /// Orange
        const ORANGE = 1 << 2;
        /// Red
        const RED = 1 << 3;
        /// Green
        const GREEN = 1 << 4;
        /// Blue
        const BLUE = 1 << 5;
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        match color {
            Color::White => ColorSet::WHITE,
            Color::Yellow => ColorSet::YELLOW,
            Color::Orange => ColorSet::ORANGE,
            Color::Red => ColorSet::RED,
            Color::Green => ColorSet::GREEN,
            Color::Blue => ColorSet::BLUE,
        }
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ColorSet::empty(), |set, color| set | Self::from(color))
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.colors().join(", "))
    }
}

impl ColorSet {
    /// Returns the colors in the set, in declaration order.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::iter().filter(move |&color| self.contains(color.into()))
    }
}
