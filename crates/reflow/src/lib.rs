//! Re-wrapping of rendered character grids to a measured width.
//!
//! Rendered pages are laid out for the size the server resolved. When the
//! surface showing them turns out narrower, or is resized, this crate
//! re-wraps the text inside each bordered block so that it fits again while
//! the left-hand border glyphs of nested boxes stay lined up.
//!
//! # Overview
//!
//! - [`prefix`]: Detecting and continuing border prefixes
//! - [`wrap`]: Re-wrapping single lines and text runs
//! - [`engine`]: The [`ReflowEngine`] and its pristine-snapshot store
//! - [`debounce`]: Coalescing bursts of resize events
//! - [`error`]: Measurement errors
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use termgrid_reflow::{Block, Debounce, FixedCellWidth, ReflowEngine};
//!
//! let mut engine = ReflowEngine::new();
//! let mut resize = Debounce::default();
//! let mut blocks = vec![Block::text(None, "│ some rendered text", 800.0)];
//!
//! let now = Instant::now();
//! resize.push(240.0, now);
//! if let Some(width) = resize.poll(now + Duration::from_millis(150)) {
//!     blocks[0].pixel_width = width;
//!     engine.reflow(&mut blocks, &FixedCellWidth(8.0));
//! }
//! assert_eq!(engine.len(), 1);
//! ```

pub mod debounce;
pub mod engine;
pub mod error;
pub mod prefix;
pub mod wrap;

// Re-export primary types at crate root for convenience
pub use debounce::{Debounce, RESIZE_DEBOUNCE};
pub use engine::{
    Block, BlockId, CellMetrics, FixedCellWidth, MIN_BLOCK_WIDTH, Node, ReflowEngine, ReflowStats,
    max_line_width,
};
pub use error::{ReflowError, Result};
pub use prefix::PrefixGlyphs;
pub use wrap::{MIN_AVAILABLE_WIDTH, wrap_line, wrap_text_run};
