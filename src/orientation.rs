//! # Orientation
//!
//! Typed display rotation so that the layout code cannot hand an arbitrary
//! string to the apply tool. The variants use the `xrandr --rotate`
//! vocabulary, which is also what the rotation picker shows.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Zero degree rotation; the panel's native orientation.
    Normal,
    /// 90 degree clockwise rotation; screen "up" is on the right.
    Right,
    /// 180 degree rotation; screen is flipped.
    Inverted,
    /// 270 degree clockwise rotation; screen "up" is on the left.
    Left,
}

/// All orientations, in the order the rotation picker offers them.
pub const ALL: [Orientation; 4] = [
    Orientation::Normal,
    Orientation::Left,
    Orientation::Right,
    Orientation::Inverted,
];

impl Orientation {
    /// The argument `xrandr --rotate` expects.
    pub fn as_arg(&self) -> &'static str {
        match *self {
            Self::Normal => "normal",
            Self::Right => "right",
            Self::Inverted => "inverted",
            Self::Left => "left",
        }
    }

    /// Parse a picker selection back into an orientation.
    ///
    /// Returns `None` for anything that is not one of the four known
    /// arguments (a free-typed rofi entry, an empty selection).
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.trim() {
            "normal" => Some(Self::Normal),
            "right" => Some(Self::Right),
            "inverted" => Some(Self::Inverted),
            "left" => Some(Self::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}
