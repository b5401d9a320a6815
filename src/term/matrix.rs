//! Fixed-size character matrix for free-form terminal layouts.
//!
//! Every position holds at most one character and an index into the
//! matrix's style table. Drawing operations clip silently at the edges.

use std::fmt;

use super::style::Style;
use crate::table::{marker, Painter, Table, Theme};

/// Index of the body text style in [`default_styles`].
pub const TEXT: usize = 0;
/// Index of the border style in [`default_styles`].
pub const BORDER: usize = 1;
pub const POSITIVE: usize = 2;
pub const NEGATIVE: usize = 3;
/// First of the five marker colors: red, orange, blue, yellow, green.
pub const MARKER_COLORS: usize = 4;
/// The same five colors on the stripe background.
pub const STRIPED_MARKER_COLORS: usize = 9;
pub const STRIPED_TEXT: usize = 14;
pub const ACCENT: usize = 15;
pub const HIGHLIGHT: usize = 16;
pub const SHADOW: usize = 17;
pub const STRIPED_BORDER: usize = 18;

pub const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';
pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';

const STRIPE_BACKGROUND: &str = "#131313";
const MARKER_FOREGROUNDS: [&str; 5] = ["#ee4035", "#f37736", "#0392cf", "#fdf498", "#7bc043"];

/// Style table used by [`CharMatrix::new`].
pub fn default_styles() -> Vec<Style> {
    let mut styles = vec![
        Style::new("#d0d0d0", "", false),
        Style::new("#81858d", "", true),
        Style::new("#b2e539", "", true),
        Style::new("#ff7940", "", true),
    ];
    styles.extend(MARKER_FOREGROUNDS.iter().map(|fg| Style::new(fg, "", true)));
    styles.extend(
        MARKER_FOREGROUNDS
            .iter()
            .map(|fg| Style::new(fg, STRIPE_BACKGROUND, true)),
    );
    styles.extend([
        Style::new("#d0d0d0", STRIPE_BACKGROUND, false),
        Style::new("#7584d9", "", true),
        Style::new("#d0d0d0", "#0c0c0c", true),
        Style::new("#141414", "", false),
        Style::new("#81858d", STRIPE_BACKGROUND, true),
    ]);
    styles
}

/// Index into [`default_styles`] for a table marker code.
///
/// Negative values and the first class share red; positive values and the
/// last two classes share green. Unknown markers use the row's text style.
pub fn marker_style(code: i32, striped: bool) -> usize {
    let offset = match code {
        marker::NEGATIVE | marker::CLASS_A => 0,
        marker::CLASS_B => 1,
        marker::CLASS_C => 2,
        marker::CLASS_D => 3,
        marker::POSITIVE | marker::CLASS_E | marker::CLASS_F => 4,
        _ if striped => return STRIPED_TEXT,
        _ => return TEXT,
    };
    if striped {
        STRIPED_MARKER_COLORS + offset
    } else {
        MARKER_COLORS + offset
    }
}

/// One position of the matrix. `None` renders as a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatrixCell {
    pub ch: Option<char>,
    pub style: usize,
}

/// A `width` x `height` grid of [`MatrixCell`]s.
#[derive(Debug, Clone)]
pub struct CharMatrix {
    width: usize,
    height: usize,
    cells: Vec<Vec<MatrixCell>>,
    styles: Vec<Style>,
}

impl CharMatrix {
    /// Create an empty matrix using [`default_styles`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![MatrixCell::default(); width]; height],
            styles: default_styles(),
        }
    }

    /// Replace the style table. Cell style indices refer into it.
    pub fn with_styles(mut self, styles: Vec<Style>) -> Self {
        self.styles = styles;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Put `ch` at (`x`, `y`). Positions outside the matrix are ignored.
    pub fn set(&mut self, x: usize, y: usize, ch: char, style: usize) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = MatrixCell {
                ch: Some(ch),
                style,
            };
        }
    }

    /// Write `text` starting at (`x`, `y`), clipped at the right edge.
    ///
    /// Returns the number of characters that landed in the matrix.
    pub fn write(&mut self, x: usize, y: usize, text: &str, style: usize) -> usize {
        let Some(row) = self.cells.get_mut(y) else {
            return 0;
        };
        let mut written = 0;
        for (cell, ch) in row.iter_mut().skip(x).zip(text.chars()) {
            *cell = MatrixCell {
                ch: Some(ch),
                style,
            };
            written += 1;
        }
        written
    }

    /// Write each `(text, style)` part followed by one blank cell.
    ///
    /// Returns the columns advanced, blanks included.
    pub fn write_text(&mut self, x: usize, y: usize, parts: &[(&str, usize)]) -> usize {
        let mut column = x;
        for (text, style) in parts {
            column += self.write(column, y, text, *style) + 1;
        }
        column - x
    }

    /// `label` as text, then `value` with two decimals colored by its sign.
    pub fn write_marked_float(&mut self, x: usize, y: usize, label: &str, value: f64) -> usize {
        let written = self.write(x, y, label, TEXT);
        let code = if value >= 0.0 {
            marker::POSITIVE
        } else {
            marker::NEGATIVE
        };
        written + self.write(x + written, y, &format!("{value:.2}"), marker_style(code, false))
    }

    /// Index of `style` in the style table, appended if not present yet.
    pub fn style_index(&mut self, style: &Style) -> usize {
        match self.styles.iter().position(|known| known == style) {
            Some(index) => index,
            None => {
                self.styles.push(*style);
                self.styles.len() - 1
            }
        }
    }

    /// Lay `table` out with its top-left corner at (`x`, `y`).
    ///
    /// The lines match [`Table::render`] with the same theme; styles the
    /// table uses are added to the style table. Returns the number of
    /// lines the table occupies, including lines clipped at the bottom.
    pub fn draw_table(&mut self, x: usize, y: usize, table: &Table, theme: &Theme) -> usize {
        let mut painter = MatrixPainter {
            matrix: self,
            left: x,
            x,
            y,
        };
        table.layout(&mut painter, theme, true);
        painter.y - y
    }

    /// Horizontal rule of `length` cells going right from (`x`, `y`).
    pub fn hline(&mut self, x: usize, y: usize, length: usize, style: usize) {
        for i in x..x.saturating_add(length) {
            self.set(i, y, HORIZONTAL, style);
        }
    }

    /// Vertical rule of `length` cells going down from (`x`, `y`).
    pub fn vline(&mut self, x: usize, y: usize, length: usize, style: usize) {
        for i in y..y.saturating_add(length) {
            self.set(x, i, VERTICAL, style);
        }
    }

    /// Draw a box whose outer size is `width` x `height`.
    ///
    /// Boxes smaller than 2 x 2 have no room for their corners and are
    /// not drawn.
    pub fn draw_box(&mut self, x: usize, y: usize, width: usize, height: usize, style: usize) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;

        self.hline(x + 1, y, width - 2, style);
        self.hline(x + 1, bottom, width - 2, style);
        self.vline(x, y + 1, height - 2, style);
        self.vline(right, y + 1, height - 2, style);

        self.set(x, y, TOP_LEFT, style);
        self.set(right, y, TOP_RIGHT, style);
        self.set(x, bottom, BOTTOM_LEFT, style);
        self.set(right, bottom, BOTTOM_RIGHT, style);
    }

    /// [`CharMatrix::draw_box`] with ` header ` centered in the top edge.
    pub fn box_with_header(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        header: &str,
        style: usize,
    ) {
        self.draw_box(x, y, width, height, style);
        let title = format!(" {header} ");
        let offset = width.saturating_sub(title.chars().count()) / 2;
        self.write(x + offset, y, &title, style);
    }

    /// Reset every cell.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(MatrixCell::default());
        }
    }

    /// Reset the cells inside a rectangle, clipped to the matrix.
    pub fn clear_box(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for row in self.cells.iter_mut().skip(y).take(height) {
            for cell in row.iter_mut().skip(x).take(width) {
                *cell = MatrixCell::default();
            }
        }
    }

    /// Change the dimensions, keeping the content that still fits.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.cells.resize(height, Vec::new());
        for row in &mut self.cells {
            row.resize(width, MatrixCell::default());
        }
        self.width = width;
        self.height = height;
    }

    pub fn row(&self, y: usize) -> Option<&[MatrixCell]> {
        self.cells.get(y).map(|row| row.as_slice())
    }

    /// Styled output, rows joined with `\n` and no trailing newline.
    ///
    /// Neighbouring cells of the same style share one escape sequence.
    /// A style index outside the table falls back to the first style, and
    /// to unstyled text when the table is empty.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            self.render_row(&mut out, row);
        }
        out
    }

    fn render_row(&self, out: &mut String, row: &[MatrixCell]) {
        let mut run = String::new();
        let mut run_style = None;

        for cell in row {
            match cell.ch {
                Some(ch) => {
                    if run_style.is_some_and(|style| style != cell.style) {
                        self.flush_run(out, &mut run, run_style.take());
                    }
                    run_style = Some(cell.style);
                    run.push(ch);
                }
                None => {
                    self.flush_run(out, &mut run, run_style.take());
                    out.push(' ');
                }
            }
        }
        self.flush_run(out, &mut run, run_style);
    }

    fn flush_run(&self, out: &mut String, run: &mut String, style: Option<usize>) {
        let Some(index) = style else {
            return;
        };
        match self.styles.get(index).or_else(|| self.styles.first()) {
            Some(style) => style.write_to(out, run),
            None => out.push_str(run),
        }
        run.clear();
    }
}

/// Writes table lines into a matrix, one row per line.
struct MatrixPainter<'a> {
    matrix: &'a mut CharMatrix,
    left: usize,
    x: usize,
    y: usize,
}

impl Painter for MatrixPainter<'_> {
    fn paint(&mut self, style: &Style, text: &str) {
        if text.is_empty() {
            return;
        }
        let index = self.matrix.style_index(style);
        self.matrix.write(self.x, self.y, text, index);
        self.x += text.chars().count();
    }

    fn end_line(&mut self) {
        self.y += 1;
        self.x = self.left;
    }
}

impl fmt::Display for CharMatrix {
    /// Content without styles, trailing blanks and trailing empty lines removed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.ch.unwrap_or(' '))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();

        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        write!(f, "{}", lines.join("\n"))
    }
}
