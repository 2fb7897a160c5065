//! A character-cell canvas backed by a ratatui [`Buffer`].
//!
//! Renderers produce plain line arrays; the canvas places those lines into
//! [`Region`]s of a viewport-sized buffer and hands back the assembled rows.
//! Writes are clipped to both the target region and the buffer, so a region
//! computed for a larger viewport can never corrupt neighbouring cells.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termgrid_protocol::{Dimensions, Region};

/// A fixed-size grid of cells.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::{Dimensions, Region};
/// use termgrid_render::canvas::Canvas;
///
/// let mut canvas = Canvas::new(Dimensions::new(6, 2));
/// canvas.paint(Region::new(1, 1, 3, 1), &["hello"]);
/// assert_eq!(canvas.lines(), ["      ", " hel  "]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    buffer: Buffer,
}

impl Canvas {
    /// Creates a blank canvas of the given size.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, dims.cols, dims.rows)),
        }
    }

    /// Returns the region covered by the canvas.
    #[must_use]
    pub fn area(&self) -> Region {
        let area = self.buffer.area;
        Region::new(
            usize::from(area.x),
            usize::from(area.y),
            usize::from(area.width),
            usize::from(area.height),
        )
    }

    /// Writes `lines` top to bottom into `region`, clipped to its bounds.
    ///
    /// Lines beyond the region's height are dropped and each line is cut at
    /// the region's right edge. Each char takes exactly one cell, so wide and
    /// combining characters are never padded or merged. Cells not covered by
    /// a line are left as-is.
    pub fn paint<S: AsRef<str>>(&mut self, region: Region, lines: &[S]) {
        let area = self.area();
        let right = region.right().min(area.right());
        let bottom = region.bottom().min(area.bottom());
        if region.x >= right {
            return;
        }

        for (y, line) in (region.y..bottom).zip(lines) {
            let Ok(row) = u16::try_from(y) else {
                return;
            };
            // One char per cell, whatever its display width.
            for (dx, c) in line.as_ref().chars().take(right - region.x).enumerate() {
                let Ok(col) = u16::try_from(region.x + dx) else {
                    break;
                };
                if let Some(cell) = self.buffer.cell_mut((col, row)) {
                    cell.set_char(c);
                }
            }
        }
    }

    /// Returns every row of the canvas, each exactly as wide as the canvas.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let area = self.buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| self.buffer.cell((x, y)))
                    .map(|cell| cell.symbol())
                    .collect()
            })
            .collect()
    }

    /// Returns the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Consumes the canvas, returning the underlying buffer.
    #[must_use]
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }
}
