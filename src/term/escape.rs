//! SGR escape sequence construction.
//!
//! An [`EscapeBuffer`] writes straight into a caller-owned `String`:
//! the introducer, the semicolon-joined attribute list, `m`, the payload
//! and finally the reset sequence. Each render call creates its own buffer,
//! so nothing is shared between concurrent renders.

use super::color::Color;

/// Escape character
pub const ESC: char = '\x1b';

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Full attribute reset
pub const RESET: &str = "\x1b[0m";

/// Attribute stage of an escape sequence.
///
/// Attributes are appended in call order; a `;` goes in front of every
/// attribute but the first.
pub struct EscapeBuffer<'a> {
    out: &'a mut String,
    has_attributes: bool,
}

/// Payload stage of an escape sequence, entered once the attribute list
/// has been closed with `m`.
pub struct EscapePayload<'a> {
    out: &'a mut String,
}

impl<'a> EscapeBuffer<'a> {
    /// Start a sequence at the end of `out`.
    pub fn new(out: &'a mut String) -> Self {
        out.push_str(CSI);
        Self {
            out,
            has_attributes: false,
        }
    }

    pub fn bold(&mut self) -> &mut Self {
        self.separator();
        self.out.push('1');
        self
    }

    /// 24-bit foreground, `38;2;R;G;B`.
    pub fn foreground(&mut self, color: Color) -> &mut Self {
        self.separator();
        self.out.push_str("38;2;");
        self.rgb(color);
        self
    }

    /// 24-bit background, `48;2;R;G;B`.
    pub fn background(&mut self, color: Color) -> &mut Self {
        self.separator();
        self.out.push_str("48;2;");
        self.rgb(color);
        self
    }

    /// Close the attribute list and start the payload.
    pub fn open(self) -> EscapePayload<'a> {
        self.out.push('m');
        EscapePayload { out: self.out }
    }

    /// Close the attribute list and write `text` as payload.
    pub fn text(self, text: &str) -> EscapePayload<'a> {
        let mut payload = self.open();
        payload.push_str(text);
        payload
    }

    fn separator(&mut self) {
        if self.has_attributes {
            self.out.push(';');
        }
        self.has_attributes = true;
    }

    fn rgb(&mut self, color: Color) {
        push_decimal(self.out, color.r);
        self.out.push(';');
        push_decimal(self.out, color.g);
        self.out.push(';');
        push_decimal(self.out, color.b);
    }
}

impl EscapePayload<'_> {
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    /// Direct access for writers that fill the payload in place.
    pub fn buffer(&mut self) -> &mut String {
        self.out
    }

    /// Append the reset sequence.
    pub fn finish(self) {
        self.out.push_str(RESET);
    }
}

/// Base-10 rendering of a byte without leading zeros.
fn push_decimal(out: &mut String, value: u8) {
    if value >= 100 {
        out.push(char::from(b'0' + value / 100));
    }
    if value >= 10 {
        out.push(char::from(b'0' + value / 10 % 10));
    }
    out.push(char::from(b'0' + value % 10));
}
