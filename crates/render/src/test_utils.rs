//! Test utilities for the render crate.
//!
//! Helpers shared by test modules for snapshot testing of rendered canvases.

use crate::canvas::Canvas;

/// Converts a canvas to a string with one line per row.
///
/// Trailing whitespace is trimmed from each line to produce cleaner output
/// suitable for snapshot testing.
#[must_use]
pub(crate) fn canvas_to_string(canvas: &Canvas) -> String {
    let mut result = String::new();
    for line in canvas.lines() {
        result.push_str(line.trim_end_matches(' '));
        result.push('\n');
    }
    result
}
