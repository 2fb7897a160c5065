//! Border-prefix detection.
//!
//! A rendered line inside a bordered block starts with a run of whitespace
//! and box-drawing glyphs: the left edges of every enclosing box. Re-wrapping
//! must keep that run on the first line and repeat a cleaned-up version of
//! it on every continuation line so nested borders stay continuous.

use termgrid_protocol::CharSet;

/// The set of glyphs that may appear in a line's border prefix.
///
/// Membership is driven by [`CharSet`] tables, the same ones used to draw the
/// borders in the first place.
///
/// # Examples
///
/// ```
/// use termgrid_reflow::PrefixGlyphs;
///
/// let glyphs = PrefixGlyphs::default();
/// assert_eq!(glyphs.split_prefix("│ ├─ item"), ("│ ├─ ", "item"));
/// assert_eq!(glyphs.continuation("│ ├─ "), "│     ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGlyphs {
    members: Vec<char>,
    verticals: Vec<char>,
}

impl PrefixGlyphs {
    /// Builds a glyph set from one or more character sets.
    #[must_use]
    pub fn new(sets: &[CharSet]) -> Self {
        let mut members: Vec<char> = sets.iter().flat_map(CharSet::glyphs).collect();
        members.sort_unstable();
        members.dedup();

        let mut verticals: Vec<char> = sets.iter().map(|set| set.v).collect();
        verticals.sort_unstable();
        verticals.dedup();

        Self { members, verticals }
    }

    /// Returns `true` if `c` may appear in a border prefix.
    #[must_use]
    pub fn is_prefix_glyph(&self, c: char) -> bool {
        c.is_whitespace() || self.members.binary_search(&c).is_ok()
    }

    /// Returns `true` if `c` is a vertical rule of one of the sets.
    #[must_use]
    pub fn is_vertical(&self, c: char) -> bool {
        self.verticals.binary_search(&c).is_ok()
    }

    /// Splits a line into its border prefix and the remaining text.
    #[must_use]
    pub fn split_prefix<'a>(&self, line: &'a str) -> (&'a str, &'a str) {
        let end = line
            .char_indices()
            .find(|&(_, c)| !self.is_prefix_glyph(c))
            .map_or(line.len(), |(idx, _)| idx);
        line.split_at(end)
    }

    /// Returns the prefix to use on continuation lines.
    ///
    /// Whitespace and vertical rules are kept; every other glyph (corners,
    /// tees, horizontal rules) becomes a space. The result has the same
    /// number of cells as `prefix`.
    #[must_use]
    pub fn continuation(&self, prefix: &str) -> String {
        prefix
            .chars()
            .map(|c| {
                if c.is_whitespace() || self.is_vertical(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }
}

impl Default for PrefixGlyphs {
    fn default() -> Self {
        Self::new(&[CharSet::LIGHT, CharSet::HEAVY, CharSet::DOUBLE])
    }
}
