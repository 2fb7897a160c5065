//! Breakpoint resolution and region allocation.
//!
//! Everything here is plain arithmetic on character counts. A viewport is
//! first classified into a [`Breakpoint`], then carved into non-overlapping
//! [`Region`]s. Child regions always carry absolute coordinates.
//!
//! Sizes never go negative: whenever chrome or gaps would consume more than
//! the available space, the affected extent is floored (at 1 for the content
//! region, at 0 everywhere else).
//!
//! # Example
//!
//! ```
//! use termgrid_protocol::{Breakpoint, Dimensions, Region};
//! use termgrid_render::layout::{content_region, layout_config};
//!
//! let config = layout_config(Dimensions::new(80, 24));
//! assert_eq!(config.breakpoint, Breakpoint::Standard);
//! assert_eq!(content_region(&config), Region::new(1, 2, 78, 20));
//! ```

use termgrid_protocol::{Breakpoint, Dimensions, Extent, LayoutConfig, Region, RowHeight};

/// Viewports narrower than this are [`Breakpoint::UltraNarrow`].
pub const COMPACT_MIN_COLS: u16 = 40;

/// Viewports at least this wide are [`Breakpoint::Standard`] or wider.
pub const STANDARD_MIN_COLS: u16 = 80;

/// Viewports at least this wide are [`Breakpoint::Wide`].
pub const WIDE_MIN_COLS: u16 = 120;

/// Minimum viewport height that leaves room for the navigation row.
pub const NAV_MIN_ROWS: u16 = 6;

/// Minimum viewport height that leaves room for the footer row.
pub const FOOTER_MIN_ROWS: u16 = 10;

/// Gap between the two content columns of a wide layout.
pub const COLUMN_GAP: usize = 2;

/// Classifies a viewport and decides which chrome it can afford.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{Breakpoint, Dimensions};
/// use termgrid_render::layout::layout_config;
///
/// let narrow = layout_config(Dimensions::new(39, 24));
/// assert_eq!(narrow.breakpoint, Breakpoint::UltraNarrow);
/// assert!(!narrow.has_borders);
///
/// let wide = layout_config(Dimensions::new(120, 5));
/// assert_eq!(wide.columns, 2);
/// assert!(!wide.has_nav);
/// ```
#[must_use]
pub fn layout_config(dims: Dimensions) -> LayoutConfig {
    let breakpoint = match dims.cols {
        c if c < COMPACT_MIN_COLS => Breakpoint::UltraNarrow,
        c if c < STANDARD_MIN_COLS => Breakpoint::Compact,
        c if c < WIDE_MIN_COLS => Breakpoint::Standard,
        _ => Breakpoint::Wide,
    };

    LayoutConfig {
        breakpoint,
        cols: dims.cols,
        rows: dims.rows,
        has_borders: breakpoint != Breakpoint::UltraNarrow,
        has_nav: dims.rows >= NAV_MIN_ROWS,
        has_footer: dims.rows >= FOOTER_MIN_ROWS,
        columns: if breakpoint == Breakpoint::Wide { 2 } else { 1 },
    }
}

/// Returns the area left for content once nav, footer and borders are taken.
///
/// The nav row is taken from the top, the footer row from the bottom, and the
/// border from every side. Width and height are floored at 1.
#[must_use]
pub fn content_region(config: &LayoutConfig) -> Region {
    let mut x = 0;
    let mut y = 0;
    let mut width = usize::from(config.cols);
    let mut height = usize::from(config.rows);

    if config.has_nav {
        y += 1;
        height = height.saturating_sub(1);
    }

    if config.has_footer {
        height = height.saturating_sub(1);
    }

    if config.has_borders {
        x += 1;
        y += 1;
        width = width.saturating_sub(2);
        height = height.saturating_sub(2);
    }

    Region::new(x, y, width.max(1), height.max(1))
}

/// Splits a region into a left and right column separated by `gap` cells.
///
/// On odd splits the right column gets the extra cell.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Region;
/// use termgrid_render::layout::split_columns;
///
/// let (left, right) = split_columns(Region::new(1, 2, 119, 10), 2);
/// assert_eq!(left, Region::new(1, 2, 58, 10));
/// assert_eq!(right, Region::new(61, 2, 59, 10));
/// ```
#[must_use]
pub fn split_columns(region: Region, gap: usize) -> (Region, Region) {
    let available = region.width.saturating_sub(gap);
    let left_width = available / 2;
    let right_width = available - left_width;

    let left = Region::new(region.x, region.y, left_width, region.height);
    let right = Region::new(
        region.x + left_width + gap,
        region.y,
        right_width,
        region.height,
    );
    (left, right)
}

/// Stacks rows top to bottom inside a region.
///
/// Fixed rows get exactly their height. Flexible rows share what is left
/// equally; any remainder from the division is left unused rather than given
/// to one of the rows.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{Region, RowHeight};
/// use termgrid_render::layout::split_rows;
///
/// let rows = split_rows(
///     Region::new(0, 0, 10, 11),
///     &[RowHeight::Fixed(1), RowHeight::Flex, RowHeight::Flex],
/// );
/// let heights: Vec<_> = rows.iter().map(|r| r.height).collect();
/// assert_eq!(heights, [1, 5, 5]);
/// assert_eq!(rows[2].y, 6);
/// ```
#[must_use]
pub fn split_rows(region: Region, heights: &[RowHeight]) -> Vec<Region> {
    let fixed_total: usize = heights
        .iter()
        .map(|h| match h {
            RowHeight::Fixed(n) => *n,
            RowHeight::Flex => 0,
        })
        .sum();
    let flex_count = heights.iter().filter(|h| h.is_flex()).count();
    let flex_height = match flex_count {
        0 => 0,
        n => region.height.saturating_sub(fixed_total) / n,
    };

    let mut y = region.y;
    heights
        .iter()
        .map(|h| {
            let row_height = match h {
                RowHeight::Fixed(n) => *n,
                RowHeight::Flex => flex_height,
            };
            let row = Region::new(region.x, y, region.width, row_height);
            y += row_height;
            row
        })
        .collect()
}

/// Carves a child region out of `parent` at a relative offset.
///
/// The result never extends past the parent's right or bottom edge.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{Extent, Region};
/// use termgrid_render::layout::sub_region;
///
/// let parent = Region::new(10, 5, 20, 8);
/// let child = sub_region(parent, 2, 1, Extent::Remaining, Extent::Cells(50));
/// assert_eq!(child, Region::new(12, 6, 18, 7));
/// ```
#[must_use]
pub fn sub_region(parent: Region, x: usize, y: usize, width: Extent, height: Extent) -> Region {
    let x = x.min(parent.width);
    let y = y.min(parent.height);
    let room_x = parent.width - x;
    let room_y = parent.height - y;

    Region::new(
        parent.x + x,
        parent.y + y,
        clamp_extent(width, room_x),
        clamp_extent(height, room_y),
    )
}

fn clamp_extent(extent: Extent, room: usize) -> usize {
    match extent {
        Extent::Cells(n) => n.min(room),
        Extent::Remaining => room,
    }
}

/// Shrinks a region by `padding` cells on every side.
#[must_use]
pub fn pad_region(region: Region, padding: usize) -> Region {
    Region::new(
        region.x + padding,
        region.y + padding,
        region.width.saturating_sub(padding * 2),
        region.height.saturating_sub(padding * 2),
    )
}

/// The three widget slots of the home layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRegions {
    /// Left column on wide layouts, top slot otherwise.
    pub primary: Region,
    /// Upper right on wide layouts, middle slot otherwise.
    pub secondary: Region,
    /// Lower right on wide layouts, bottom slot otherwise.
    pub tertiary: Region,
}

impl WidgetRegions {
    /// Returns the regions in slot order.
    #[must_use]
    pub const fn as_array(&self) -> [Region; 3] {
        [self.primary, self.secondary, self.tertiary]
    }
}

/// Allocates the widget slots for a layout.
///
/// Two-column layouts put the primary widget in the left column and stack the
/// other two in the right column. Single-column layouts stack all three.
#[must_use]
pub fn widget_regions(config: &LayoutConfig) -> WidgetRegions {
    let content = content_region(config);

    if config.is_two_column() {
        let (left, right) = split_columns(content, COLUMN_GAP);
        let stacked = split_rows(right, &[RowHeight::Flex, RowHeight::Flex]);
        return WidgetRegions {
            primary: left,
            secondary: stacked[0],
            tertiary: stacked[1],
        };
    }

    let stacked = split_rows(content, &[RowHeight::Flex; 3]);
    WidgetRegions {
        primary: stacked[0],
        secondary: stacked[1],
        tertiary: stacked[2],
    }
}
