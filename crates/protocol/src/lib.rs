//! Shared protocol types for the termgrid application.
//!
//! This crate defines the value types passed between the layout, rendering,
//! and reflow components. Everything here is plain data: sizes are counted in
//! character cells and one character always occupies one cell.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`geometry`]: Viewport dimensions, regions, and split sizing
//! - [`layout`]: Breakpoint tiers and the per-request layout configuration
//! - [`charset`]: Box-drawing glyph tables
//! - [`align`]: Alignment, border position, and board perspective
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use termgrid_protocol::{BorderStyle, CharSet, Region};
//!
//! let region = Region::new(1, 2, 78, 20);
//! assert_eq!(region.right(), 79);
//! assert_eq!(region.bottom(), 22);
//!
//! let chars: &CharSet = BorderStyle::Rounded.charset();
//! assert_eq!(chars.tl, '╭');
//! ```

pub mod align;
pub mod charset;
pub mod error;
pub mod geometry;
pub mod layout;

// Re-export primary types at crate root for convenience
pub use align::{Align, BorderPosition, Perspective};
pub use charset::{BorderStyle, CharSet};
pub use error::{ProtocolError, Result};
pub use geometry::{Dimensions, Extent, Region, RowHeight};
pub use layout::{Breakpoint, LayoutConfig};
