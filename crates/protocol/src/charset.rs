//! Box-drawing glyph tables.
//!
//! A [`CharSet`] names the eleven glyphs needed to draw boxes, dividers and
//! grids. Five sets are predefined and selectable through [`BorderStyle`];
//! callers may also build their own `CharSet` value.
//!
//! | Style | Sample |
//! |-------|--------|
//! | `light` | `┌─┬─┐` |
//! | `heavy` | `┏━┳━┓` |
//! | `double` | `╔═╦═╗` |
//! | `rounded` | `╭─┬─╮` |
//! | `ascii` | `+-+-+` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A table of border-drawing glyphs.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::CharSet;
///
/// let chars = CharSet::LIGHT;
/// assert_eq!(chars.h, '─');
/// assert!(chars.contains('┼'));
/// assert!(!chars.contains('x'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharSet {
    /// Horizontal rule.
    pub h: char,
    /// Vertical rule.
    pub v: char,
    /// Top-left corner.
    pub tl: char,
    /// Top-right corner.
    pub tr: char,
    /// Bottom-left corner.
    pub bl: char,
    /// Bottom-right corner.
    pub br: char,
    /// Left tee (`├`).
    pub lt: char,
    /// Right tee (`┤`).
    pub rt: char,
    /// Top tee (`┬`).
    pub tt: char,
    /// Bottom tee (`┴`).
    pub bt: char,
    /// Four-way junction.
    pub cross: char,
}

impl CharSet {
    /// Light single-line box drawing.
    pub const LIGHT: Self = Self {
        h: '─',
        v: '│',
        tl: '┌',
        tr: '┐',
        bl: '└',
        br: '┘',
        lt: '├',
        rt: '┤',
        tt: '┬',
        bt: '┴',
        cross: '┼',
    };

    /// Heavy single-line box drawing.
    pub const HEAVY: Self = Self {
        h: '━',
        v: '┃',
        tl: '┏',
        tr: '┓',
        bl: '┗',
        br: '┛',
        lt: '┣',
        rt: '┫',
        tt: '┳',
        bt: '┻',
        cross: '╋',
    };

    /// Double-line box drawing.
    pub const DOUBLE: Self = Self {
        h: '═',
        v: '║',
        tl: '╔',
        tr: '╗',
        bl: '╚',
        br: '╝',
        lt: '╠',
        rt: '╣',
        tt: '╦',
        bt: '╩',
        cross: '╬',
    };

    /// Light box drawing with rounded corners.
    pub const ROUNDED: Self = Self {
        tl: '╭',
        tr: '╮',
        bl: '╰',
        br: '╯',
        ..Self::LIGHT
    };

    /// Plain ASCII fallback.
    pub const ASCII: Self = Self {
        h: '-',
        v: '|',
        tl: '+',
        tr: '+',
        bl: '+',
        br: '+',
        lt: '+',
        rt: '+',
        tt: '+',
        bt: '+',
        cross: '+',
    };

    /// Returns every glyph in the set.
    #[must_use]
    pub const fn glyphs(&self) -> [char; 11] {
        [
            self.h, self.v, self.tl, self.tr, self.bl, self.br, self.lt, self.rt, self.tt,
            self.bt, self.cross,
        ]
    }

    /// Returns `true` if `c` is one of this set's glyphs.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.glyphs().contains(&c)
    }

    /// Returns `true` if `c` is this set's vertical rule.
    #[must_use]
    pub fn is_vertical(&self, c: char) -> bool {
        c == self.v
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// The predefined glyph sets.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{BorderStyle, CharSet};
///
/// let style: BorderStyle = "double".parse().unwrap();
/// assert_eq!(style.charset(), &CharSet::DOUBLE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// [`CharSet::LIGHT`]
    #[default]
    Light,
    /// [`CharSet::HEAVY`]
    Heavy,
    /// [`CharSet::DOUBLE`]
    Double,
    /// [`CharSet::ROUNDED`]
    Rounded,
    /// [`CharSet::ASCII`]
    Ascii,
}

impl BorderStyle {
    /// Returns all predefined styles.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Light,
            Self::Heavy,
            Self::Double,
            Self::Rounded,
            Self::Ascii,
        ]
    }

    /// Returns the glyph table for this style.
    #[must_use]
    pub const fn charset(self) -> &'static CharSet {
        match self {
            Self::Light => &CharSet::LIGHT,
            Self::Heavy => &CharSet::HEAVY,
            Self::Double => &CharSet::DOUBLE,
            Self::Rounded => &CharSet::ROUNDED,
            Self::Ascii => &CharSet::ASCII,
        }
    }

    /// Returns the lowercase name of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Heavy => "heavy",
            Self::Double => "double",
            Self::Rounded => "rounded",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProtocolError::unknown("border style", s))
    }
}
