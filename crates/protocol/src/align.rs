//! Small closed enumerations used by the renderers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Horizontal alignment of text within a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad both sides, the odd cell going right.
    Center,
}

/// Which border line of a box is being drawn.
///
/// Selects corner glyphs for [`Top`](Self::Top) and [`Bottom`](Self::Bottom)
/// and tee glyphs for [`Middle`](Self::Middle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderPosition {
    /// `┌───┐`
    #[default]
    Top,
    /// `├───┤`
    Middle,
    /// `└───┘`
    Bottom,
}

/// The side of the board shown at the bottom of a diagram.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Perspective;
///
/// assert_eq!("black".parse::<Perspective>().unwrap(), Perspective::Black);
/// assert_eq!(Perspective::White.flipped(), Perspective::Black);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    /// Rank 1 at the bottom, files `a..h` left to right.
    #[default]
    White,
    /// Rank 8 at the bottom, files `h..a` left to right.
    Black,
}

impl Perspective {
    /// Returns the opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

macro_rules! named_enum {
    ($ty:ty, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the lowercase name of the variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ProtocolError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    other => Err(ProtocolError::unknown($kind, other)),
                }
            }
        }
    };
}

named_enum!(Align, "alignment", {
    Left => "left",
    Right => "right",
    Center => "center",
});

named_enum!(BorderPosition, "border position", {
    Top => "top",
    Middle => "middle",
    Bottom => "bottom",
});

named_enum!(Perspective, "perspective", {
    White => "white",
    Black => "black",
});
