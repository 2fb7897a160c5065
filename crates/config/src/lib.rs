//! Configuration management for termgrid.
//!
//! This crate decides how big a grid may be and how its borders look. It
//! loads those settings from files and the environment, and negotiates the
//! viewport for each request from the hints a client sends.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`grid`]: Grid bounds and lenient dimension parsing
//! - [`client`]: Per-request negotiation and plain-text client detection
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! From highest to lowest:
//!
//! 1. Environment variables (`TERMGRID_GRID_*`, `TERMGRID_BORDER_STYLE`)
//! 2. Local config (`./termgrid.json5` or `./termgrid.json`)
//! 3. User config (`<config dir>/termgrid/config.json5` or `config.json`)
//! 4. Built-in defaults (80×24, columns 20..=300, rows 10..=100, light borders)
//!
//! # Example
//!
//! ```json5
//! {
//!   grid: { default_cols: 100, max_cols: 200 },
//!   border_style: "rounded",
//! }
//! ```
//!
//! ```no_run
//! use termgrid_config::{ClientHints, Config, negotiate};
//!
//! # async fn example() -> termgrid_config::Result<()> {
//! let config = Config::load().await?;
//! let request = negotiate(
//!     &config.grid,
//!     ClientHints { cols: Some("120"), rows: Some("40"), user_agent: Some("curl/8.5") },
//! );
//! assert!(request.plain_text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod grid;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use client::{ClientHints, GridRequest, is_plain_text_client, negotiate};
pub use config::Config;
pub use error::{ConfigError, Result};
pub use grid::GridConfig;
