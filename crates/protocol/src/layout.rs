//! Breakpoint tiers and layout configuration.
//!
//! A [`LayoutConfig`] is derived once per request from the viewport
//! [`Dimensions`](crate::Dimensions) and then only read. The derivation itself
//! lives in the renderer; this module only defines the shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A named viewport-size tier.
///
/// Tiers are ordered from narrowest to widest.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Breakpoint;
///
/// let bp: Breakpoint = "ultra-narrow".parse().unwrap();
/// assert_eq!(bp, Breakpoint::UltraNarrow);
/// assert_eq!(Breakpoint::Wide.to_string(), "wide");
/// assert!(Breakpoint::Compact < Breakpoint::Standard);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    /// Fewer than 40 columns; no borders.
    UltraNarrow,
    /// 40 to 79 columns.
    Compact,
    /// 80 to 119 columns.
    #[default]
    Standard,
    /// 120 columns or more; two content columns.
    Wide,
}

impl Breakpoint {
    /// Returns all breakpoints from narrowest to widest.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::UltraNarrow, Self::Compact, Self::Standard, Self::Wide]
    }

    /// Returns the kebab-case name of the breakpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UltraNarrow => "ultra-narrow",
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| ProtocolError::unknown("breakpoint", s))
    }
}

/// Layout decisions for one viewport.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{Breakpoint, LayoutConfig};
///
/// let config = LayoutConfig {
///     breakpoint: Breakpoint::Standard,
///     cols: 80,
///     rows: 24,
///     has_borders: true,
///     has_nav: true,
///     has_footer: true,
///     columns: 1,
/// };
/// assert!(!config.is_two_column());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// The viewport tier.
    pub breakpoint: Breakpoint,
    /// Viewport width in columns.
    pub cols: u16,
    /// Viewport height in rows.
    pub rows: u16,
    /// Whether the content area is framed by a border.
    pub has_borders: bool,
    /// Whether a navigation row is shown at the top.
    pub has_nav: bool,
    /// Whether a footer row is shown at the bottom.
    pub has_footer: bool,
    /// Number of content columns (1 or 2).
    pub columns: u8,
}

impl LayoutConfig {
    /// Returns `true` when content is laid out in two columns.
    #[must_use]
    pub const fn is_two_column(&self) -> bool {
        self.columns == 2
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for Breakpoint {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(Breakpoint::UltraNarrow),
                Just(Breakpoint::Compact),
                Just(Breakpoint::Standard),
                Just(Breakpoint::Wide),
            ]
            .boxed()
        }
    }

    proptest! {
        /// Display and FromStr agree for every breakpoint.
        #[test]
        fn breakpoint_name_roundtrip(bp in any::<Breakpoint>()) {
            let parsed: Breakpoint = bp.to_string().parse().expect("parse");
            prop_assert_eq!(bp, parsed);
        }

        /// Serde and Display use the same names.
        #[test]
        fn breakpoint_serde_matches_display(bp in any::<Breakpoint>()) {
            let json = serde_json::to_string(&bp).expect("serialize");
            prop_assert_eq!(json, format!("\"{bp}\""));
        }
    }
}
