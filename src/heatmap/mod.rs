//! Rows of bucketed values drawn as colored glyphs.
//!
//! Every line is a name followed by one glyph per value. Values are
//! bucket indices from 0 (worst) to 4 (best); a negative value marks an
//! empty slot and is drawn as a blank.

mod scheme;

pub use scheme::{ColorScheme, Symbols};

use std::fmt;

use tracing::trace;

use crate::term::{visible_length, Style};

/// Largest bucket index a value may have.
pub const MAX_BUCKET: i32 = 4;

/// Sentinel stored for empty slots.
pub const EMPTY: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatMapLine {
    pub name: String,
    pub entries: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct HeatMap {
    name: String,
    offset: usize,
    recent: usize,
    lines: Vec<HeatMapLine>,
    scheme: ColorScheme,
    odd_scheme: ColorScheme,
    padding: usize,
    symbols: Symbols,
    delimiter: usize,
}

impl HeatMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            offset: 0,
            recent: 0,
            lines: Vec::new(),
            scheme: ColorScheme::even(),
            odd_scheme: ColorScheme::odd(),
            padding: 1,
            symbols: Symbols::BLOCK,
            delimiter: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Skip the first `offset` entries of every line.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Show only the last `recent` entries of every line. Overrides `offset`.
    pub fn recent(mut self, recent: usize) -> Self {
        self.recent = recent;
        self
    }

    pub fn symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Spaces after every glyph.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Insert a `|` in front of every `delimiter`-th entry. 0 disables it.
    pub fn delimiter(mut self, delimiter: usize) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn odd_scheme(mut self, scheme: ColorScheme) -> Self {
        self.odd_scheme = scheme;
        self
    }

    pub fn lines(&self) -> &[HeatMapLine] {
        &self.lines
    }

    /// Append an empty line and return its index.
    pub fn create_line(&mut self, name: impl Into<String>) -> usize {
        self.lines.push(HeatMapLine {
            name: name.into(),
            entries: Vec::new(),
        });
        self.lines.len() - 1
    }

    /// Append `value` to line `line`.
    ///
    /// Values above [`MAX_BUCKET`] are ignored and negative values are
    /// stored as [`EMPTY`].
    pub fn add_value(&mut self, line: usize, value: i32) {
        if value > MAX_BUCKET {
            trace!(line, value, "Heat map value out of range, ignored");
            return;
        }
        match self.lines.get_mut(line) {
            Some(entry) => entry.entries.push(value.max(EMPTY)),
            None => trace!(line, "Heat map line not found"),
        }
    }

    /// Append a complete line. Values are stored as given.
    pub fn add_line(&mut self, name: impl Into<String>, values: Vec<i32>) {
        self.lines.push(HeatMapLine {
            name: name.into(),
            entries: values,
        });
    }

    /// ANSI-styled rendering. Every line ends with `\n`.
    pub fn render(&self) -> String {
        self.render_with(true)
    }

    pub fn render_plain(&self) -> String {
        self.render_with(false)
    }

    fn first_entry(&self, line: &HeatMapLine) -> usize {
        if self.recent > 0 {
            line.entries.len().saturating_sub(self.recent)
        } else {
            self.offset
        }
    }

    /// Columns taken by the visible entries of `line`, delimiters included.
    fn content_width(&self, line: &HeatMapLine) -> usize {
        let cell = 1 + self.padding;
        (self.first_entry(line)..line.entries.len())
            .map(|index| {
                if self.is_delimited(index) {
                    2 * cell
                } else {
                    cell
                }
            })
            .sum()
    }

    fn is_delimited(&self, index: usize) -> bool {
        self.delimiter > 0 && index % self.delimiter == 0
    }

    fn render_with(&self, styled: bool) -> String {
        let mut out = String::new();
        let paint = |out: &mut String, style: &Style, text: &str| {
            if text.is_empty() {
                return;
            }
            if styled {
                style.write_to(out, text);
            } else {
                out.push_str(text);
            }
        };

        let trailer = " ".repeat(self.padding);
        let blank = format!(" {trailer}");
        let delimiter = format!("|{trailer}");

        let name_width = self
            .lines
            .iter()
            .map(|line| visible_length(&line.name))
            .max()
            .unwrap_or(0)
            + 2;
        let content_width = self
            .lines
            .iter()
            .map(|line| self.content_width(line))
            .max()
            .unwrap_or(0);

        paint(&mut out, &self.scheme.text, &self.name);
        out.push('\n');
        paint(
            &mut out,
            &self.scheme.text,
            &"-".repeat(name_width + content_width),
        );
        out.push('\n');

        let mut cell = String::new();
        for (row, line) in self.lines.iter().enumerate() {
            let scheme = if row % 2 == 1 {
                &self.odd_scheme
            } else {
                &self.scheme
            };

            paint(&mut out, &scheme.text, &line.name);
            let gap = name_width.saturating_sub(visible_length(&line.name));
            paint(&mut out, &scheme.text, &" ".repeat(gap));

            let start = self.first_entry(line);
            for (index, &value) in line.entries.iter().enumerate().skip(start) {
                if self.is_delimited(index) {
                    paint(&mut out, &self.scheme.text, &delimiter);
                }
                if value < 0 {
                    paint(&mut out, &scheme.text, &blank);
                } else {
                    cell.clear();
                    cell.push_str(self.symbols.get(value));
                    cell.push_str(&trailer);
                    paint(&mut out, scheme.get(value.min(MAX_BUCKET)), &cell);
                }
            }

            let fill = content_width - self.content_width(line);
            paint(&mut out, &scheme.text, &" ".repeat(fill));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for HeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
