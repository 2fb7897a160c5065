//! Config file discovery, reading and writing.
//!
//! Files are parsed as JSON5, which also accepts plain JSON. They are
//! written back as pretty-printed JSON.
//!
//! # File Locations
//!
//! The first existing file wins:
//!
//! 1. `./termgrid.json5`, then `./termgrid.json`
//! 2. `<config dir>/termgrid/config.json5`, then `<config dir>/termgrid/config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// File names looked for in the working directory.
const LOCAL_FILE_NAMES: &[&str] = &["termgrid.json5", "termgrid.json"];

/// Directory under the platform config directory.
const USER_CONFIG_DIR: &str = "termgrid";

/// File names looked for in the user config directory.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the config file in the working and user config directories.
///
/// # Examples
///
/// ```no_run
/// use termgrid_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("using {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the config file given explicit search directories.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let found = local.chain(user).find(|path| path.is_file());
    match &found {
        Some(path) => debug!(?path, "found config file"),
        None => debug!("no config file found"),
    }
    found
}

/// Returns the user config directory, e.g. `~/.config/termgrid`.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns where a new user config file should be written.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?path, bytes = content.len(), "read config file");
    Ok(serde_json5::from_str(&content)?)
}

/// Writes a config value as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file or its
/// parent directories cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)?;
    debug!(?path, "wrote config file");
    Ok(())
}
