//! Theme file I/O operations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::ThemeConfig;
use crate::error::{Error, Result};

/// Get the theme file path (~/.config/termtable/theme.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("theme.toml"))
}

/// Get the config directory path (~/.config/termtable)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".config").join("termtable"))
}

/// Load the theme from the default location, or return defaults if not found
pub fn load() -> Result<ThemeConfig> {
    let path = config_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        debug!(path = ?path, "No theme file, using built-in theme");
        Ok(ThemeConfig::default())
    }
}

/// Load and validate a theme file
pub fn load_from(path: &Path) -> Result<ThemeConfig> {
    debug!(path = ?path, "Loading theme");
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ThemeConfig = toml::from_str(&contents).map_err(|source| Error::ThemeParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Write a theme file, creating its directory if needed
pub fn save_to(config: &ThemeConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = ?path, "Theme saved");
    Ok(())
}
