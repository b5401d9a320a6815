//! Theme configuration for tables and heat maps

mod io;
mod types;

pub use types::*;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::heatmap::{ColorScheme, HeatMap};
use crate::table::{Border, Theme};

impl ThemeConfig {
    /// Get the theme file path (~/.config/termtable/theme.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/termtable)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load the theme file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parse and validate theme file contents
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the theme file to the default location
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check every color string strictly.
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;
        self.heatmap.validate()
    }

    pub fn table_theme(&self) -> Theme {
        Theme {
            regular: self.table.regular.to_styles(),
            striped: self.table.striped.to_styles(),
        }
    }

    /// Even and odd row schemes
    pub fn heatmap_schemes(&self) -> (ColorScheme, ColorScheme) {
        (self.heatmap.scheme.to_scheme(), self.heatmap.odd.to_scheme())
    }

    pub fn border(&self) -> Border {
        self.layout.border.border()
    }

    /// Apply schemes, glyphs and padding to a heat map
    pub fn style_heatmap(&self, map: HeatMap) -> HeatMap {
        let (scheme, odd) = self.heatmap_schemes();
        map.scheme(scheme)
            .odd_scheme(odd)
            .symbols(self.layout.symbols.symbols())
            .padding(self.layout.padding)
    }
}
