//! The four rating axes every box is measured on.

use std::fmt::Display;

/// Number of dimensions of the rating space.
pub const AXIS_COUNT: usize = 4;

/// One of the four named rating categories.
///
/// Axes index into the fixed-size interval array of a
/// [`PartRange`](super::PartRange) via [`Axis::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    M,
    A,
    S,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::M, Axis::A, Axis::S];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::M => 1,
            Axis::A => 2,
            Axis::S => 3,
        }
    }

    /// Single-letter name used in workflow sources.
    pub const fn symbol(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::M => 'm',
            Axis::A => 'a',
            Axis::S => 's',
        }
    }

    /// Looks an axis up by its single-letter name.
    pub const fn from_symbol(symbol: char) -> Option<Axis> {
        match symbol {
            'x' => Some(Axis::X),
            'm' => Some(Axis::M),
            'a' => Some(Axis::A),
            's' => Some(Axis::S),
            _ => None,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
