//! Two-column `Name` / `Value` tables.

use std::fmt;

use super::Table;

#[derive(Debug, Clone)]
pub struct KeyValueTable {
    table: Table,
}

impl KeyValueTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: Table::new().with_name(name).with_headers(["Name", "Value"]),
        }
    }

    pub fn add_row(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table
            .create_row()
            .add_default_text(key)
            .add_default_text(value);
    }

    pub fn add_float(&mut self, key: impl Into<String>, value: f64, marker: i32) {
        self.table
            .create_row()
            .add_default_text(key)
            .add_float(value, marker);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}

impl fmt::Display for KeyValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
