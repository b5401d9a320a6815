//! Console rendering of tables.
//!
//! Column widths come from the widest header or cell text plus one space
//! on each side. Rows are laid out as
//!
//! ```text
//! name
//! ┌──────┬───────┐
//! │ Name │ Value │
//! ├──────┼───────┤
//! │ a    │     1 │
//! └──────┴───────┘
//! ```
//!
//! Borderless tables keep only the name, the header and a rule below it.

use std::fmt;

use super::border::Border;
use super::marker::NEUTRAL;
use super::theme::Theme;
use super::{Row, Table};
use crate::term::{format_string, pad, visible_length, Alignment, Style};

/// Spaces around the text of every cell.
const CELL_PADDING: usize = 1;

/// Receives the styled segments of a table, one line at a time.
pub(crate) trait Painter {
    fn paint(&mut self, style: &Style, text: &str);
    fn end_line(&mut self);
}

/// String output that either styles its segments or writes them as is.
struct Canvas {
    out: String,
    styled: bool,
}

impl Painter for Canvas {
    fn paint(&mut self, style: &Style, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.styled {
            style.write_to(&mut self.out, text);
        } else {
            self.out.push_str(text);
        }
    }

    fn end_line(&mut self) {
        self.out.push('\n');
    }
}

impl Table {
    /// Display width of every column, padding included.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers().iter().map(|h| visible_length(h)).collect();
        for row in self.rows() {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(visible_length(&cell.text));
            }
        }
        widths.iter().map(|w| w + 2 * CELL_PADDING).collect()
    }

    /// Visible width of one rendered line, frame included.
    pub fn width(&self) -> usize {
        let widths = self.column_widths();
        widths.iter().sum::<usize>() + (widths.len() + 1) * self.border().size
    }

    /// ANSI-styled rendering. Every line ends with `\n`.
    pub fn render(&self, theme: &Theme) -> String {
        self.render_to_string(theme, true, true)
    }

    /// The same layout without escape sequences.
    pub fn render_plain(&self) -> String {
        self.render_to_string(&Theme::default(), false, true)
    }

    /// Frame and body only: no header line and no rule below it.
    ///
    /// Columns keep the widths the headers would give them, so a headless
    /// table lines up with a headed one built from the same data.
    pub fn render_headless(&self, theme: &Theme) -> String {
        self.render_to_string(theme, true, false)
    }

    /// [`Table::render_headless`] without escape sequences.
    pub fn render_headless_plain(&self) -> String {
        self.render_to_string(&Theme::default(), false, false)
    }

    fn render_to_string(&self, theme: &Theme, styled: bool, header: bool) -> String {
        let mut canvas = Canvas {
            out: String::new(),
            styled,
        };
        self.layout(&mut canvas, theme, header);
        canvas.out
    }

    /// Send every line of the table to `painter`.
    pub(crate) fn layout<P: Painter>(&self, painter: &mut P, theme: &Theme, header: bool) {
        let widths = self.column_widths();
        let border = self.border();
        let frame = theme.regular.header;

        if !self.name().is_empty() {
            painter.paint(&theme.regular.text, self.name());
            painter.end_line();
        }

        if border.is_framed() {
            let top = rule(border, &widths, border.top_left, border.top_junction, border.top_right);
            painter.paint(&frame, &top);
            painter.end_line();
        }

        if header {
            let mut line = String::from(border.vertical);
            for (index, (name, width)) in self.headers().iter().zip(&widths).enumerate() {
                if index > 0 {
                    line.push_str(border.vertical);
                }
                line.push_str(&format_string(name, *width, Alignment::Center));
            }
            line.push_str(border.vertical);
            painter.paint(&frame, &line);
            painter.end_line();

            let separator = rule(
                border,
                &widths,
                border.left_junction,
                border.cross,
                border.right_junction,
            );
            painter.paint(&frame, &separator);
            painter.end_line();
        }

        let visible = self.limit().unwrap_or(usize::MAX);
        for (index, row) in self.rows().iter().take(visible).enumerate() {
            self.render_row(painter, theme, row, &widths, index % 2 == 0);
        }

        if border.is_framed() {
            let bottom = rule(
                border,
                &widths,
                border.bottom_left,
                border.bottom_junction,
                border.bottom_right,
            );
            painter.paint(&frame, &bottom);
            painter.end_line();
        }
    }

    fn render_row<P: Painter>(
        &self,
        painter: &mut P,
        theme: &Theme,
        row: &Row,
        widths: &[usize],
        striped: bool,
    ) {
        let border = self.border();
        let frame = theme.styles(striped).header;
        let mut text = String::new();

        painter.paint(&frame, border.vertical);
        for (index, width) in widths.iter().enumerate() {
            if index > 0 {
                painter.paint(&frame, border.vertical);
            }
            let (content, marker, alignment) = match row.cell(index) {
                Some(cell) => (cell.text.as_str(), cell.marker, cell.alignment),
                None => ("", NEUTRAL, Alignment::Left),
            };
            let style = self
                .custom_style(marker)
                .unwrap_or_else(|| theme.style_for(marker, striped));

            text.clear();
            pad(&mut text, CELL_PADDING);
            text.push_str(&format_string(
                content,
                width.saturating_sub(2 * CELL_PADDING),
                alignment,
            ));
            pad(&mut text, CELL_PADDING);
            painter.paint(style, &text);
        }
        painter.paint(&frame, border.vertical);
        painter.end_line();
    }
}

/// A horizontal rule across all columns, e.g. `├──┼───┤`.
fn rule(border: &Border, widths: &[usize], left: &str, junction: &str, right: &str) -> String {
    let mut line = String::from(left);
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            line.push_str(junction);
        }
        line.push_str(&border.horizontal.repeat(*width));
    }
    line.push_str(right);
    line
}

impl fmt::Display for Table {
    /// Styled with [`Theme::default`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Theme::default()))
    }
}
