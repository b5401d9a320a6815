//! Tabular data with semantic cell markers.
//!
//! A [`Table`] owns headers and rows of [`Cell`]s. Cells carry a marker
//! code (see [`marker`]) that a [`Theme`] turns into a style at render
//! time, so the same table can be rendered with different themes or as
//! plain text.

mod border;
mod cell;
mod filter;
mod key_value;
pub mod marker;
mod render;
mod theme;

pub use border::Border;
pub use cell::{Cell, Row};
pub use filter::{Comparator, FilterDef};
pub use key_value::KeyValueTable;
pub(crate) use render::Painter;
pub use theme::{MarkerStyles, Theme};

use std::cmp::Ordering;

use tracing::trace;

use crate::term::{Alignment, Style};
use marker::{CUSTOM_BASE, NEUTRAL};

/// A named table of rows under a fixed set of headers.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    created: String,
    headers: Vec<String>,
    rows: Vec<Row>,
    limit: Option<usize>,
    border: Border,
    custom_styles: Vec<Style>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            created: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            headers: Vec::new(),
            rows: Vec::new(),
            limit: None,
            border: Border::DEFAULT,
            custom_styles: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Render at most `limit` rows.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation time, `%Y-%m-%d %H:%M` in local time.
    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Append an empty row sized to the current headers.
    pub fn create_row(&mut self) -> &mut Row {
        let index = self.rows.len();
        self.rows.push(Row::with_capacity(self.headers.len()));
        &mut self.rows[index]
    }

    /// A row with `text` centered in every column.
    pub fn delimiter_line(&mut self, text: &str) -> &mut Row {
        let columns = self.headers.len();
        let row = self.create_row();
        for _ in 0..columns {
            row.add_aligned_text(text, NEUTRAL, Alignment::Center);
        }
        row
    }

    /// Register a table-local style and return the marker that selects it.
    pub fn add_style(&mut self, style: Style) -> i32 {
        self.custom_styles.push(style);
        CUSTOM_BASE + (self.custom_styles.len() as i32 - 1)
    }

    pub fn custom_style(&self, marker: i32) -> Option<&Style> {
        let index = usize::try_from(marker.checked_sub(CUSTOM_BASE)?).ok()?;
        self.custom_styles.get(index)
    }

    pub fn set_header_name(&mut self, column: usize, name: impl Into<String>) -> &mut Self {
        if let Some(header) = self.headers.get_mut(column) {
            *header = name.into();
        }
        self
    }

    pub fn find_column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn set_text(&mut self, row: usize, column: usize, text: impl Into<String>) {
        if let Some(cell) = self
            .rows
            .get_mut(row)
            .and_then(|row| row.cells.get_mut(column))
        {
            cell.text = text.into();
        }
    }

    /// Sort rows by the values in column `name`, largest first.
    ///
    /// Unknown columns leave the order untouched.
    pub fn sort(&mut self, name: &str) {
        self.sort_by_column(name, |a, b| b.total_cmp(&a));
    }

    /// Sort rows by the values in column `name`, smallest first.
    pub fn sort_reverse(&mut self, name: &str) {
        self.sort_by_column(name, |a, b| a.total_cmp(&b));
    }

    fn sort_by_column(&mut self, name: &str, order: impl Fn(f64, f64) -> Ordering) {
        let Some(column) = self.find_column_index(name) else {
            trace!(column = name, "Sort column not found");
            return;
        };
        let value = |row: &Row| row.cell(column).map_or(f64::NEG_INFINITY, |c| c.value);
        self.rows.sort_by(|a, b| order(value(a), value(b)));
    }

    /// A table with the same layout holding rows `start..end`.
    pub fn sub(&self, start: usize, end: usize) -> Table {
        let end = end.min(self.rows.len());
        let rows = self.rows.get(start..end).unwrap_or_default();
        self.derive(rows.to_vec())
    }

    /// The last `count` rows.
    pub fn filter_recent(&self, count: usize) -> Table {
        let start = self.rows.len().saturating_sub(count);
        self.sub(start, self.rows.len())
    }

    /// Rows whose cell passes `expression`, e.g. `"Name == foo"`.
    ///
    /// A malformed expression or an unknown column yields an empty table.
    pub fn filter(&self, expression: &str) -> Table {
        let Some(def) = FilterDef::parse(expression) else {
            trace!(expression, "Invalid filter expression");
            return self.derive(Vec::new());
        };
        let Some(column) = self.find_column_index(&def.header) else {
            trace!(column = %def.header, "Filter column not found");
            return self.derive(Vec::new());
        };
        let rows = self
            .rows
            .iter()
            .filter(|row| row.cell(column).is_some_and(|cell| def.matches(&cell.text)))
            .cloned()
            .collect();
        self.derive(rows)
    }

    fn derive(&self, rows: Vec<Row>) -> Table {
        Table {
            name: self.name.clone(),
            created: self.created.clone(),
            headers: self.headers.clone(),
            rows,
            limit: None,
            border: self.border,
            custom_styles: self.custom_styles.clone(),
        }
    }
}
