//! Core configuration struct and loading logic.
//!
//! [`Config`] aggregates the grid bounds and the border style. Values come
//! from built-in defaults, then a config file, then `TERMGRID_*` environment
//! variables, each layer overriding the previous one.

use std::path::Path;

use serde::{Deserialize, Serialize};
use termgrid_protocol::BorderStyle;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::grid::GridConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variables for each grid field.
const GRID_ENV: [(&str, GridField); 6] = [
    ("TERMGRID_GRID_DEFAULT_COLS", GridField::DefaultCols),
    ("TERMGRID_GRID_DEFAULT_ROWS", GridField::DefaultRows),
    ("TERMGRID_GRID_MIN_COLS", GridField::MinCols),
    ("TERMGRID_GRID_MAX_COLS", GridField::MaxCols),
    ("TERMGRID_GRID_MIN_ROWS", GridField::MinRows),
    ("TERMGRID_GRID_MAX_ROWS", GridField::MaxRows),
];

/// Environment variable naming the border style.
pub const BORDER_STYLE_ENV: &str = "TERMGRID_BORDER_STYLE";

#[derive(Debug, Clone, Copy)]
enum GridField {
    DefaultCols,
    DefaultRows,
    MinCols,
    MaxCols,
    MinRows,
    MaxRows,
}

impl GridField {
    fn slot(self, grid: &mut GridConfig) -> &mut u16 {
        match self {
            Self::DefaultCols => &mut grid.default_cols,
            Self::DefaultRows => &mut grid.default_rows,
            Self::MinCols => &mut grid.min_cols,
            Self::MaxCols => &mut grid.max_cols,
            Self::MinRows => &mut grid.min_rows,
            Self::MaxRows => &mut grid.max_rows,
        }
    }
}

/// The termgrid configuration.
///
/// # Examples
///
/// ```
/// use termgrid_config::{Config, GridConfig};
/// use termgrid_protocol::BorderStyle;
///
/// let config = Config::default();
/// assert_eq!(config.grid, GridConfig::default());
/// assert_eq!(config.border_style, BorderStyle::Light);
///
/// let config = Config {
///     border_style: BorderStyle::Double,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Viewport defaults and bounds.
    #[serde(default)]
    pub grid: GridConfig,

    /// Glyph set used for every border.
    #[serde(default)]
    pub border_style: BorderStyle,
}

impl Config {
    /// Creates a configuration with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default locations and the environment.
    ///
    /// Without a config file the built-in defaults are used. Environment
    /// overrides are applied last and the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed, or if the final configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use termgrid_config::Config;
    ///
    /// # async fn example() -> termgrid_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("default grid: {:?}", config.grid.default_dimensions());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Loads configuration from a specific file, without the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, then applies environment
    /// overrides and validates the result.
    ///
    /// Follows the same order as [`Config::load`], so an override can fix
    /// bounds the file alone gets wrong.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// final configuration is invalid.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_file_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load_file`], with overrides from an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// final configuration is invalid.
    pub fn load_file_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = read_config_file(path)?;
        config.apply_env_from(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid bounds are inconsistent.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()
    }

    /// Applies `TERMGRID_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Applies `TERMGRID_*` overrides from an arbitrary lookup.
    ///
    /// Unparseable values are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use termgrid_config::Config;
    /// use termgrid_protocol::BorderStyle;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_from(|key| match key {
    ///     "TERMGRID_GRID_MAX_COLS" => Some("160".to_string()),
    ///     "TERMGRID_BORDER_STYLE" => Some("heavy".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.grid.max_cols, 160);
    /// assert_eq!(config.border_style, BorderStyle::Heavy);
    /// ```
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (key, field) in GRID_ENV {
            let Some(value) = lookup(key) else {
                continue;
            };
            match value.trim().parse::<u16>() {
                Ok(parsed) => {
                    debug!(key, parsed, "grid override from environment");
                    *field.slot(&mut self.grid) = parsed;
                }
                Err(err) => warn!(key, value = %value, %err, "ignoring invalid grid override"),
            }
        }

        if let Some(value) = lookup(BORDER_STYLE_ENV) {
            match value.parse::<BorderStyle>() {
                Ok(style) => {
                    debug!(%style, "border style from environment");
                    self.border_style = style;
                }
                Err(err) => warn!(value = %value, %err, "ignoring invalid border style"),
            }
        }
    }
}
