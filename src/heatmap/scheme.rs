//! Bucket colors and glyph sets for heat maps.

use crate::term::{palette, Style};

/// Styles for the five value buckets plus the surrounding text.
///
/// Bucket 0 is the worst (`e`), bucket 4 the best (`a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub text: Style,
    pub a: Style,
    pub b: Style,
    pub c: Style,
    pub d: Style,
    pub e: Style,
}

impl ColorScheme {
    pub fn get(&self, bucket: i32) -> &Style {
        match bucket {
            0 => &self.e,
            1 => &self.d,
            2 => &self.c,
            3 => &self.b,
            4 => &self.a,
            _ => &self.text,
        }
    }

    /// Red to green buckets on `background`, with `text` for names.
    pub fn on(text: &str, background: &str) -> Self {
        let bucket = |color: &str| Style::new(color, background, false);
        Self {
            text: Style::new(text, background, false),
            a: bucket("#00ff00"),
            b: bucket("#6fa287"),
            c: bucket(palette::BLUE),
            d: bucket("#ff6700"),
            e: bucket("#ff0000"),
        }
    }

    pub fn even() -> Self {
        Self::on(palette::WHITE, palette::BACKGROUND)
    }

    pub fn odd() -> Self {
        Self::on(palette::GRAY, palette::BACKGROUND_ODD)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::even()
    }
}

/// One glyph per bucket, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols(pub [&'static str; 5]);

impl Symbols {
    pub const BLOCK: Symbols = Symbols(["■"; 5]);
    pub const FILLED_CIRCLE: Symbols = Symbols(["⬤"; 5]);
    pub const ROUND_SQUARE_OUTLINED: Symbols = Symbols(["▢"; 5]);
    pub const ARROW: Symbols = Symbols(["⭣", "⭠", "■", "⭢", "⭡"]);
    pub const TRIANGLE: Symbols = Symbols(["⯆", "⯇", "◼", "⯈", "⯅"]);

    /// Glyph for `bucket`, clamped into `0..=4`.
    pub fn get(&self, bucket: i32) -> &'static str {
        self.0[bucket.clamp(0, 4) as usize]
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::BLOCK
    }
}
