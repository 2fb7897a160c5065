//! Viewport dimensions and rectangular regions.
//!
//! All measurements are in character cells. A [`Region`] is an axis-aligned
//! rectangle with absolute coordinates: child regions produced by the layout
//! allocator already include their parent's offset.

use serde::{Deserialize, Serialize};

/// The size of a character-cell viewport.
///
/// By the time a `Dimensions` value reaches the layout engine it has already
/// been clamped into the configured bounds, so both axes are positive.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Dimensions;
///
/// let dims = Dimensions::new(80, 24);
/// assert_eq!(dims.cols, 80);
/// assert_eq!(dims.rows, 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of columns (cells per line).
    pub cols: u16,
    /// Number of rows (lines).
    pub rows: u16,
}

impl Dimensions {
    /// Creates dimensions from a column and row count.
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// An axis-aligned rectangle of character cells.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Region;
///
/// let region = Region::new(2, 3, 10, 4);
/// assert_eq!(region.right(), 12);
/// assert_eq!(region.bottom(), 7);
/// assert!(!region.is_empty());
/// assert!(Region::new(0, 0, 0, 5).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Column offset of the left edge.
    pub x: usize,
    /// Row offset of the top edge.
    pub y: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Region {
    /// Creates a region from its offset and size.
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the region covering a whole viewport.
    #[must_use]
    pub fn full(dims: Dimensions) -> Self {
        Self::new(0, 0, usize::from(dims.cols), usize::from(dims.rows))
    }

    /// Column just past the right edge.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// Row just past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Returns `true` if the region covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The requested height of one row in a row split.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::RowHeight;
///
/// let rows = [RowHeight::Fixed(1), RowHeight::Flex, RowHeight::Fixed(1)];
/// assert_eq!(rows.iter().filter(|r| r.is_flex()).count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHeight {
    /// A fixed number of rows.
    Fixed(usize),
    /// An equal share of whatever the fixed rows leave over.
    Flex,
}

impl RowHeight {
    /// Returns `true` for [`RowHeight::Flex`].
    #[must_use]
    pub const fn is_flex(self) -> bool {
        matches!(self, Self::Flex)
    }
}

/// The extent of a sub-region along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// An explicit number of cells, clamped to the parent.
    Cells(usize),
    /// Everything from the offset to the parent's far edge.
    Remaining,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_region_covers_viewport() {
        let region = Region::full(Dimensions::new(80, 24));
        assert_eq!(region, Region::new(0, 0, 80, 24));
    }

    #[test]
    fn empty_regions() {
        assert!(Region::default().is_empty());
        assert!(Region::new(3, 3, 5, 0).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn row_height_serialization() {
        let json = serde_json::to_string(&[RowHeight::Fixed(2), RowHeight::Flex]).unwrap();
        assert_eq!(json, r#"[{"fixed":2},"flex"]"#);
    }
}
