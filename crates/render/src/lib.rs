//! Layout allocation and character-grid rendering.
//!
//! This crate turns a viewport size into regions and fills those regions
//! with text, box-drawing borders, block art and chess diagrams. Every
//! function is pure and total: the same inputs always produce the same
//! lines, and undersized inputs degrade to shorter or emptier output rather
//! than errors.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`layout`]: Breakpoints and region allocation
//! - [`text`]: Wrapping, truncation and alignment
//! - [`borders`]: Boxes, titled boxes, dividers and joins
//! - [`art`]: Progress bars, sparklines, spinners and placeholders
//! - [`board`]: Chess board diagrams
//! - [`canvas`]: A viewport-sized cell grid regions are painted into
//! - [`page`]: Whole-page composition of nav, widgets and footer
//!
//! # Example
//!
//! ```
//! use termgrid_protocol::{BorderStyle, Dimensions};
//! use termgrid_render::{ContentBlock, Page, layout_config, render_page};
//!
//! let layout = layout_config(Dimensions::new(60, 20));
//! let page = Page {
//!     site_name: "home".into(),
//!     widgets: [
//!         ContentBlock::new("Now", "Reading"),
//!         ContentBlock::default(),
//!         ContentBlock::default(),
//!     ],
//!     ..Default::default()
//! };
//!
//! let lines = render_page(&layout, &page, BorderStyle::Rounded.charset()).lines();
//! assert_eq!(lines.len(), 20);
//! assert!(lines[0].starts_with("home"));
//! ```

pub mod art;
pub mod board;
pub mod borders;
pub mod canvas;
pub mod layout;
pub mod page;
pub mod text;

#[cfg(test)]
pub(crate) mod test_utils;

pub use board::{Board, render_board};
pub use borders::{draw_box, titled_box};
pub use canvas::Canvas;
pub use layout::{WidgetRegions, content_region, layout_config, widget_regions};
pub use page::{ContentBlock, Page, render_page};
pub use text::{pad_line, truncate, wrap_text};
