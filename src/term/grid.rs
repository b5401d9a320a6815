//! Multi-column layout of independently styled, multi-line text blocks.
//!
//! A [`Grid`] is built up front and rendered in one read-only pass. Every
//! [`GridRow`] is laid out on its own: each cell's text is split on `\n`
//! and the row produces as many output lines as its tallest cell. Cells
//! with fewer lines are filled with blanks of their full width.

use std::fmt;

use super::layout::{pad, write_formatted, Alignment};
use super::style::Style;

/// Placement of a line inside a grid cell. Grid cells only align left or
/// right; centered content has to be centered in the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAlign {
    #[default]
    Left = 0,
    Right = 1,
}

impl From<GridAlign> for Alignment {
    fn from(align: GridAlign) -> Self {
        match align {
            GridAlign::Left => Alignment::Left,
            GridAlign::Right => Alignment::Right,
        }
    }
}

/// A block of text occupying `width` display columns.
#[derive(Debug, Clone, Default)]
pub struct GridCell {
    pub style: Style,
    pub width: usize,
    pub text: String,
    pub align: GridAlign,
    /// Emit text without any escape wrapping, e.g. for pre-rendered tables.
    pub plain: bool,
}

impl GridCell {
    pub fn styled(style: Style, width: usize, text: impl Into<String>) -> Self {
        Self {
            style,
            width,
            text: text.into(),
            align: GridAlign::Left,
            plain: false,
        }
    }

    pub fn plain(width: usize, text: impl Into<String>) -> Self {
        Self {
            style: Style::plain(),
            width,
            text: text.into(),
            align: GridAlign::Left,
            plain: true,
        }
    }

    pub fn align(mut self, align: GridAlign) -> Self {
        self.align = align;
        self
    }

    /// Lay out one line of this cell: padding, aligned text, padding.
    fn write_line(&self, out: &mut String, line: &str, padding: usize) {
        let inner = self.width.saturating_sub(2 * padding);
        pad(out, padding);
        if self.plain {
            write_formatted(out, line, inner, self.align.into());
        } else {
            let mut payload = self.style.open(out);
            write_formatted(payload.buffer(), line, inner, self.align.into());
            payload.finish();
        }
        pad(out, padding);
    }
}

/// Cells laid out side by side, sharing one padding value.
#[derive(Debug, Clone, Default)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
    /// Spaces on both sides of every cell's text, inside the cell width.
    pub padding: usize,
}

impl GridRow {
    pub fn new(padding: usize) -> Self {
        Self {
            cells: Vec::new(),
            padding,
        }
    }

    pub fn push(mut self, cell: GridCell) -> Self {
        self.cells.push(cell);
        self
    }

    fn write_to(&self, out: &mut String) {
        let columns: Vec<Vec<&str>> = self
            .cells
            .iter()
            .map(|cell| cell.text.split('\n').collect())
            .collect();
        let line_count = columns.iter().map(Vec::len).max().unwrap_or(0);

        for line in 0..line_count {
            for (cell, lines) in self.cells.iter().zip(&columns) {
                match lines.get(line) {
                    Some(text) => cell.write_line(out, text, self.padding),
                    // the filler width already covers the padding
                    None => pad(out, cell.width),
                }
            }
            out.push('\n');
        }
    }
}

/// Rows of cells rendered top to bottom.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, row: GridRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Every output line, including the last one, ends with `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            row.write_to(&mut out);
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
