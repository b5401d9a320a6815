//! Errors of the configuration layer.
//!
//! Rendering never fails: unparseable colors fall back to black and
//! unknown markers to the text style. Only loading, saving and validating
//! a theme file can produce an [`Error`].

use std::path::PathBuf;

/// Errors that can occur while handling theme files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse theme file {path:?}: {source}")]
    ThemeParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize theme: {0}")]
    ThemeSerialize(#[from] toml::ser::Error),

    #[error("Invalid color {value:?}, expected #rgb or #rrggbb")]
    InvalidColor { value: String },

    #[error("Invalid color for {role}: {value:?}")]
    InvalidRole { role: String, value: String },

    #[error("Could not determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
