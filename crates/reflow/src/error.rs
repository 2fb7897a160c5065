//! Error types for the termgrid-reflow crate.
//!
//! Measurement failures never abort a reflow pass: the engine logs them and
//! leaves the affected block as it was.

use thiserror::Error;

/// Errors that can occur while measuring a block.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReflowError {
    /// The measured cell width was zero, negative, or not a number.
    #[error("invalid cell width: {width}")]
    InvalidCellWidth {
        /// The measured width in pixels.
        width: f64,
    },

    /// The block width was not a finite number of pixels.
    #[error("invalid block width: {width}")]
    InvalidBlockWidth {
        /// The measured width in pixels.
        width: f64,
    },

    /// The block is too narrow to be worth re-wrapping.
    #[error("block fits {cells} cells, need at least {min}")]
    TooNarrow {
        /// Cells per line the block could hold.
        cells: i64,
        /// The minimum usable width.
        min: usize,
    },
}

/// A specialized Result type for reflow operations.
pub type Result<T> = std::result::Result<T, ReflowError>;
