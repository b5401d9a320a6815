//! Table cells and rows.

use tracing::trace;

use super::marker::{self, NEUTRAL};
use crate::term::Alignment;

/// One table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub text: String,
    /// Sort key; text-only cells keep `0.0`.
    pub value: f64,
    pub marker: i32,
    pub alignment: Alignment,
    pub link: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>, marker: i32, alignment: Alignment) -> Self {
        Self {
            text: text.into(),
            marker,
            alignment,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

/// Cells of one table row, at most `capacity` of them.
///
/// The capacity is the header count of the owning table at the time
/// the row was created. Cells pushed beyond it are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    capacity: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            cells: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn add_cell(&mut self, cell: Cell) -> &mut Self {
        if self.is_full() {
            trace!(
                capacity = self.capacity,
                text = %cell.text,
                "Row is full, cell dropped"
            );
        } else {
            self.cells.push(cell);
        }
        self
    }

    pub fn add_text(&mut self, text: impl Into<String>, marker: i32) -> &mut Self {
        self.add_cell(Cell::new(text, marker, Alignment::Left))
    }

    pub fn add_default_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_text(text, NEUTRAL)
    }

    pub fn add_aligned_text(
        &mut self,
        text: impl Into<String>,
        marker: i32,
        alignment: Alignment,
    ) -> &mut Self {
        self.add_cell(Cell::new(text, marker, alignment))
    }

    pub fn add_empty(&mut self) -> &mut Self {
        self.add_default_text("")
    }

    pub fn add_link(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
        let mut cell = Cell::new(text, NEUTRAL, Alignment::Left);
        cell.link = Some(url.into());
        self.add_cell(cell)
    }

    /// Right-aligned integer, sortable by its value.
    pub fn add_int(&mut self, value: i64, marker: i32) -> &mut Self {
        let cell = Cell::new(value.to_string(), marker, Alignment::Right).with_value(value as f64);
        self.add_cell(cell)
    }

    /// Right-aligned float with two decimals.
    pub fn add_float(&mut self, value: f64, marker: i32) -> &mut Self {
        let cell = Cell::new(format!("{value:.2}"), marker, Alignment::Right).with_value(value);
        self.add_cell(cell)
    }

    /// Float rounded to two decimals and marked by the sign of the
    /// rounded value, so `-0.004` shows as a neutral `0.00`.
    pub fn add_marked_float(&mut self, value: f64) -> &mut Self {
        let mut rounded = (value / 0.01).round() * 0.01;
        let marker = marker::for_sign(rounded);
        if marker == NEUTRAL {
            rounded = 0.0;
        }
        let cell = Cell::new(format!("{rounded:.2}"), marker, Alignment::Right).with_value(value);
        self.add_cell(cell)
    }
}
