//! Block-character art: bars, sparklines, spinners and placeholders.
//!
//! These helpers turn already-fetched numbers (playback progress, activity
//! counts, weekly totals) into single-line graphics that fit a fixed width.

use termgrid_protocol::{Align, CharSet};

use crate::borders::draw_box;
use crate::text::{ELLIPSIS, center_text, pad_line, truncate_with, visual_width};

/// Shades from darkest to lightest.
const SHADES: [char; 5] = ['█', '▓', '▒', '░', ' '];

/// Sparkline levels from lowest to highest.
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Braille spinner frames.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Cells reserved for the ` NNN%` suffix of a progress bar.
const PERCENT_WIDTH: usize = 5;

/// Maps a brightness value to a shade glyph, dark to light.
///
/// # Examples
///
/// ```
/// use termgrid_render::art::brightness_to_char;
///
/// assert_eq!(brightness_to_char(0), '█');
/// assert_eq!(brightness_to_char(255), ' ');
/// ```
#[must_use]
pub fn brightness_to_char(brightness: u8) -> char {
    let index = usize::from(brightness) * (SHADES.len() - 1) / 255;
    SHADES[index.min(SHADES.len() - 1)]
}

/// Appearance of a [`progress_bar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStyle {
    /// Glyph for the completed part.
    pub filled: char,
    /// Glyph for the remaining part.
    pub empty: char,
    /// Whether to append a right-aligned percentage.
    pub show_percent: bool,
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self {
            filled: '█',
            empty: '░',
            show_percent: false,
        }
    }
}

/// Draws a progress bar `width` cells wide.
///
/// `progress` is a percentage and is clamped to `0..=100`. With
/// `show_percent`, five cells are reserved for the ` NNN%` suffix.
///
/// # Examples
///
/// ```
/// use termgrid_render::art::{ProgressStyle, progress_bar};
///
/// assert_eq!(progress_bar(50.0, 10, ProgressStyle::default()), "█████░░░░░");
///
/// let style = ProgressStyle { show_percent: true, ..Default::default() };
/// assert_eq!(progress_bar(100.0, 9, style), "████ 100%");
/// ```
#[must_use]
pub fn progress_bar(progress: f64, width: usize, style: ProgressStyle) -> String {
    let percent = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    };
    let bar_width = if style.show_percent {
        width.saturating_sub(PERCENT_WIDTH)
    } else {
        width
    };

    let filled = ((percent / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);

    let mut bar: String = std::iter::repeat_n(style.filled, filled)
        .chain(std::iter::repeat_n(style.empty, bar_width - filled))
        .collect();

    if style.show_percent {
        bar.push_str(&format!(" {:>3}%", percent.round() as u32));
    }
    bar
}

/// Returns the spinner glyph for an animation frame.
#[must_use]
pub fn spinner(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Draws a labelled bar: the label padded to `label_width`, a space, then a
/// `bar_width` progress bar.
///
/// # Examples
///
/// ```
/// use termgrid_render::art::bar_chart_line;
///
/// assert_eq!(bar_chart_line("Running", 25.0, 4, 4), "Runn █░░░");
/// ```
#[must_use]
pub fn bar_chart_line(label: &str, value: f64, label_width: usize, bar_width: usize) -> String {
    let label = pad_line(label, label_width, Align::Left);
    let bar = progress_bar(value, bar_width, ProgressStyle::default());
    format!("{label} {bar}")
}

/// Draws a sparkline of at most `width` cells.
///
/// When there are more values than cells, every `len / width`-th value is
/// sampled. A flat series renders at the lowest level.
///
/// # Examples
///
/// ```
/// use termgrid_render::art::spark_line;
///
/// assert_eq!(spark_line(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 8), "▁▂▃▄▅▆▇█");
/// assert_eq!(spark_line(&[], 8), "");
/// ```
#[must_use]
pub fn spark_line(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };
    let step = (values.len() / width).max(1);

    values
        .iter()
        .step_by(step)
        .take(width)
        .map(|v| {
            let index = ((v - min) * (SPARKS.len() - 1) as f64 / range).floor() as usize;
            SPARKS[index.min(SPARKS.len() - 1)]
        })
        .collect()
}

/// Draws a boxed placeholder `width × height` cells with a centered `♪ ♫`.
///
/// Used where artwork would be shown on a graphical display.
#[must_use]
pub fn art_placeholder(width: usize, height: usize, chars: &CharSet) -> Vec<String> {
    let inner_width = width.saturating_sub(2);
    let inner_height = height.saturating_sub(2);
    let middle = height / 2;

    let body: Vec<String> = (1..=inner_height)
        .map(|row| {
            if row == middle {
                center_text("♪ ♫", inner_width)
            } else {
                String::new()
            }
        })
        .collect();
    draw_box(&body, inner_width, chars)
}

/// A status with a one-glyph indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIndicator {
    /// `●`
    Ok,
    /// `✗`
    Error,
    /// `⚠`
    Warning,
    /// `○`
    Info,
}

impl StatusIndicator {
    /// Returns the indicator glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Ok => '●',
            Self::Error => '✗',
            Self::Warning => '⚠',
            Self::Info => '○',
        }
    }

    /// Prefixes a message with the indicator, cut to `width` cells.
    #[must_use]
    pub fn label(self, message: &str, width: usize) -> String {
        let text = format!("{} {message}", self.glyph());
        if visual_width(&text) <= width {
            text
        } else {
            truncate_with(&text, width, ELLIPSIS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shades_cover_range() {
        assert_eq!(brightness_to_char(0), '█');
        assert_eq!(brightness_to_char(128), '▒');
        assert_eq!(brightness_to_char(255), ' ');
    }

    #[test]
    fn progress_bar_clamps() {
        let style = ProgressStyle::default();
        assert_eq!(progress_bar(-10.0, 4, style), "░░░░");
        assert_eq!(progress_bar(250.0, 4, style), "████");
        assert_eq!(progress_bar(f64::NAN, 4, style), "░░░░");
    }

    #[test]
    fn progress_bar_percent_suffix() {
        let style = ProgressStyle {
            show_percent: true,
            ..Default::default()
        };
        assert_eq!(progress_bar(42.0, 15, style), "████░░░░░░  42%");
        assert_eq!(progress_bar(0.0, 5, style), "   0%");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner(0), '⠋');
        assert_eq!(spinner(10), '⠋');
        assert_eq!(spinner(13), spinner(3));
    }

    #[test]
    fn bar_chart_line_pads_label() {
        assert_eq!(bar_chart_line("Run", 50.0, 5, 4), "Run   ██░░");
    }

    #[test]
    fn spark_line_samples_long_series() {
        let values: Vec<f64> = (0..20).map(f64::from).collect();
        let line = spark_line(&values, 5);
        assert_eq!(visual_width(&line), 5);
        assert!(line.starts_with('▁'));
    }

    #[test]
    fn spark_line_flat_series() {
        assert_eq!(spark_line(&[3.0, 3.0, 3.0], 10), "▁▁▁");
    }

    #[test]
    fn placeholder_centers_notes() {
        let lines = art_placeholder(9, 5, &CharSet::LIGHT);
        assert_eq!(
            lines,
            [
                "┌───────┐",
                "│       │",
                "│  ♪ ♫  │",
                "│       │",
                "└───────┘",
            ]
        );
    }

    #[test]
    fn status_labels() {
        assert_eq!(StatusIndicator::Ok.label("synced", 20), "● synced");
        assert_eq!(StatusIndicator::Error.label("failed badly", 6), "✗ fai…");
        assert_eq!(StatusIndicator::Warning.glyph(), '⚠');
        assert_eq!(StatusIndicator::Info.glyph(), '○');
    }
}
