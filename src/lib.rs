//! termtable
//!
//! ANSI 24-bit styling, fixed-width text layout, tables and heat maps
//! for terminal reports.

pub mod config;
pub mod error;
pub mod heatmap;
pub mod table;
pub mod term;

pub use config::ThemeConfig;
pub use error::{Error, Result};
pub use heatmap::HeatMap;
pub use table::{Border, KeyValueTable, Table, Theme};
pub use term::{Color, Grid, GridCell, GridRow, Style};
