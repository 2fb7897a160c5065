//! Grid size bounds and dimension negotiation.
//!
//! A client announces the grid it can show as two loosely formatted hints
//! (columns and rows). Each hint is parsed leniently and clamped into the
//! configured bounds; a missing or unparseable hint falls back to the
//! configured default. The result is always a usable viewport.

use serde::{Deserialize, Serialize};
use termgrid_protocol::Dimensions;

use crate::error::{ConfigError, Result};

/// Default viewport width.
pub const DEFAULT_COLS: u16 = 80;

/// Default viewport height.
pub const DEFAULT_ROWS: u16 = 24;

/// Default minimum width.
pub const DEFAULT_MIN_COLS: u16 = 20;

/// Default maximum width.
pub const DEFAULT_MAX_COLS: u16 = 300;

/// Default minimum height.
pub const DEFAULT_MIN_ROWS: u16 = 10;

/// Default maximum height.
pub const DEFAULT_MAX_ROWS: u16 = 100;

/// Viewport defaults and bounds.
///
/// # Examples
///
/// ```
/// use termgrid_config::GridConfig;
///
/// let grid = GridConfig::default();
/// let dims = grid.resolve(Some("500"), None);
/// assert_eq!((dims.cols, dims.rows), (300, 24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Width used when the client gives no usable hint.
    pub default_cols: u16,
    /// Height used when the client gives no usable hint.
    pub default_rows: u16,
    /// Smallest accepted width.
    pub min_cols: u16,
    /// Largest accepted width.
    pub max_cols: u16,
    /// Smallest accepted height.
    pub min_rows: u16,
    /// Largest accepted height.
    pub max_rows: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_cols: DEFAULT_COLS,
            default_rows: DEFAULT_ROWS,
            min_cols: DEFAULT_MIN_COLS,
            max_cols: DEFAULT_MAX_COLS,
            min_rows: DEFAULT_MIN_ROWS,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl GridConfig {
    /// Returns the default viewport.
    #[must_use]
    pub const fn default_dimensions(&self) -> Dimensions {
        Dimensions::new(self.default_cols, self.default_rows)
    }

    /// Resolves a viewport from a column hint and a row hint.
    #[must_use]
    pub fn resolve(&self, cols: Option<&str>, rows: Option<&str>) -> Dimensions {
        Dimensions::new(
            parse_dimension(cols, self.default_cols, self.min_cols, self.max_cols),
            parse_dimension(rows, self.default_rows, self.min_rows, self.max_rows),
        )
    }

    /// Clamps an already-measured viewport into the configured bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use termgrid_config::GridConfig;
    /// use termgrid_protocol::Dimensions;
    ///
    /// let grid = GridConfig::default();
    /// assert_eq!(grid.clamp(Dimensions::new(5, 500)), Dimensions::new(20, 100));
    /// ```
    #[must_use]
    pub fn clamp(&self, dims: Dimensions) -> Dimensions {
        Dimensions::new(
            dims.cols.min(self.max_cols).max(self.min_cols),
            dims.rows.min(self.max_rows).max(self.min_rows),
        )
    }

    /// Checks that the bounds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGrid`] if a minimum is zero, a minimum
    /// exceeds its maximum, or a default lies outside its bounds.
    pub fn validate(&self) -> Result<()> {
        check_axis("cols", self.default_cols, self.min_cols, self.max_cols)?;
        check_axis("rows", self.default_rows, self.min_rows, self.max_rows)
    }
}

fn check_axis(axis: &str, default: u16, min: u16, max: u16) -> Result<()> {
    let reason = if min == 0 {
        format!("min_{axis} must be at least 1")
    } else if min > max {
        format!("min_{axis} {min} exceeds max_{axis} {max}")
    } else if !(min..=max).contains(&default) {
        format!("default_{axis} {default} is outside {min}..={max}")
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidGrid { reason })
}

/// Parses one dimension hint.
///
/// Leading whitespace and an optional sign are accepted, then as many digits
/// as follow; anything after the digits is ignored. A missing, empty or
/// digitless hint yields `default`; any parsed number is clamped to
/// `min..=max`, with `min` winning if the bounds are inverted.
///
/// # Examples
///
/// ```
/// use termgrid_config::grid::parse_dimension;
///
/// assert_eq!(parse_dimension(Some("120"), 80, 20, 300), 120);
/// assert_eq!(parse_dimension(Some("132px"), 80, 20, 300), 132);
/// assert_eq!(parse_dimension(Some("-4"), 80, 20, 300), 20);
/// assert_eq!(parse_dimension(Some("wide"), 80, 20, 300), 80);
/// assert_eq!(parse_dimension(None, 80, 20, 300), 80);
/// ```
#[must_use]
pub fn parse_dimension(value: Option<&str>, default: u16, min: u16, max: u16) -> u16 {
    let Some(parsed) = value.and_then(parse_leading_int) else {
        return default;
    };
    let clamped = parsed.min(i64::from(max)).max(i64::from(min));
    u16::try_from(clamped).unwrap_or(default)
}

fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // Saturate absurdly long inputs instead of rejecting them.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let grid = GridConfig::default();
        assert_eq!(grid.default_dimensions(), Dimensions::new(80, 24));
        assert_eq!((grid.min_cols, grid.max_cols), (20, 300));
        assert_eq!((grid.min_rows, grid.max_rows), (10, 100));
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn resolve_clamps_and_falls_back() {
        let grid = GridConfig::default();
        assert_eq!(grid.resolve(None, None), Dimensions::new(80, 24));
        assert_eq!(
            grid.resolve(Some("120"), Some("40")),
            Dimensions::new(120, 40)
        );
        assert_eq!(grid.resolve(Some("5"), Some("5")), Dimensions::new(20, 10));
        assert_eq!(
            grid.resolve(Some("99999999999999999999"), Some("1000")),
            Dimensions::new(300, 100)
        );
        assert_eq!(grid.resolve(Some(""), Some("abc")), Dimensions::new(80, 24));
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("+7cols"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn validate_rejects_bad_bounds() {
        let zero_min = GridConfig {
            min_cols: 0,
            ..Default::default()
        };
        assert!(zero_min.validate().is_err());

        let inverted = GridConfig {
            min_rows: 50,
            max_rows: 40,
            ..Default::default()
        };
        let err = inverted.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid grid bounds: min_rows 50 exceeds max_rows 40"
        );

        let default_outside = GridConfig {
            default_cols: 400,
            ..Default::default()
        };
        assert!(default_outside.validate().is_err());
    }

    #[test]
    fn deserialize_partial_grid() {
        let grid: GridConfig = serde_json::from_str(r#"{"max_cols": 200}"#).unwrap();
        assert_eq!(grid.max_cols, 200);
        assert_eq!(grid.default_cols, DEFAULT_COLS);
    }
}
