//! Immutable text styles rendered as 24-bit SGR sequences.

use super::color::Color;
use super::escape::{EscapeBuffer, EscapePayload, ESC};
use super::palette;

/// Presence bit for the foreground color
pub const FOREGROUND: u8 = 1;
/// Presence bit for the background color
pub const BACKGROUND: u8 = 2;
/// Enable bit for bold text
pub const BOLD: u8 = 4;

/// Bytes an escape wrapper adds at most: introducer, bold, two RGB
/// attributes, `m` and the reset.
const ESCAPE_OVERHEAD: usize = 48;

/// Optional foreground, optional background and a bold flag.
///
/// Unset colors are tracked through presence bits, so a style whose
/// foreground is black differs from one without a foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    foreground: Color,
    background: Color,
    flags: u8,
}

impl Style {
    /// Build a style from hex strings; an empty string leaves that color unset.
    pub fn new(foreground: &str, background: &str, bold: bool) -> Self {
        let foreground = (!foreground.is_empty()).then(|| Color::hex(foreground));
        let background = (!background.is_empty()).then(|| Color::hex(background));
        Self::from_colors(foreground, background, bold)
    }

    pub fn from_colors(foreground: Option<Color>, background: Option<Color>, bold: bool) -> Self {
        let mut style = Self::default();
        if let Some(color) = foreground {
            style.foreground = color;
            style.flags |= FOREGROUND;
        }
        if let Some(color) = background {
            style.background = color;
            style.flags |= BACKGROUND;
        }
        if bold {
            style.flags |= BOLD;
        }
        style
    }

    /// The style with no bits set.
    pub const fn plain() -> Self {
        Self {
            foreground: Color::rgb(0, 0, 0),
            background: Color::rgb(0, 0, 0),
            flags: 0,
        }
    }

    /// Default body text: white, no background.
    pub fn text() -> Self {
        Self::new(palette::WHITE, "", false)
    }

    /// Body text for odd rows.
    pub fn text_odd() -> Self {
        Self::new(palette::GRAY, "", false)
    }

    pub fn foreground(&self) -> Option<Color> {
        (self.flags & FOREGROUND != 0).then_some(self.foreground)
    }

    pub fn background(&self) -> Option<Color> {
        (self.flags & BACKGROUND != 0).then_some(self.background)
    }

    pub fn is_bold(&self) -> bool {
        self.flags & BOLD != 0
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Wrap `text` in this style's escape sequence and a reset.
    ///
    /// Built fresh on every call; equal inputs give byte-identical output.
    pub fn convert(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + ESCAPE_OVERHEAD);
        self.write_to(&mut out, text);
        out
    }

    /// Same bytes as [`Style::convert`], appended to `out`.
    pub fn write_to(&self, out: &mut String, text: &str) {
        let mut payload = self.open(out);
        payload.push_str(text);
        payload.finish();
    }

    /// Write the attribute list to `out` and hand back the payload stage,
    /// for callers that lay out text directly inside the sequence.
    pub fn open<'a>(&self, out: &'a mut String) -> EscapePayload<'a> {
        let mut buffer = EscapeBuffer::new(out);
        if self.is_bold() {
            buffer.bold();
        }
        if let Some(color) = self.foreground() {
            buffer.foreground(color);
        }
        if let Some(color) = self.background() {
            buffer.background(color);
        }
        buffer.open()
    }

    /// The opening sequence with ESC spelled out, for log fields.
    ///
    /// Only the attributes that are set appear, between the leading `ESC[`
    /// and the closing `m`, so a plain style gives `ESC[m`.
    pub fn debug(&self) -> String {
        let mut out = String::new();
        self.open(&mut out);
        out.replace(ESC, "ESC")
    }
}
