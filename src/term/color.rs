//! 24-bit RGB colors parsed from hex strings.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An RGB triple with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` string.
    ///
    /// The 4-character form carries one hex digit per channel, so `#abc`
    /// is `{10, 11, 12}` and not `#aabbcc`. Anything unparseable yields the
    /// zero color; callers cannot tell black from garbage.
    pub fn hex(s: &str) -> Self {
        let digits = if s.len() == 4 { 1 } else { 2 };
        scan_channels(s, digits).map_or_else(Self::default, |[r, g, b]| Self { r, g, b })
    }

    /// Strict variant of [`Color::hex`] used where a typo should be reported.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let well_formed = s.starts_with('#')
            && matches!(s.len(), 4 | 7)
            && s[1..].bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(Error::InvalidColor {
                value: s.to_string(),
            });
        }
        Ok(Self::hex(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Shorthand for [`Color::hex`].
pub fn hex(s: &str) -> Color {
    Color::hex(s)
}

/// Scan `#` followed by three hex fields of at most `digits` digits each.
///
/// Spaces before a field are skipped and input after the third field is
/// ignored. A field without any hex digit fails the whole scan.
fn scan_channels(s: &str, digits: usize) -> Option<[u8; 3]> {
    let mut bytes = s.strip_prefix('#')?.bytes().peekable();
    let mut channels = [0u8; 3];

    for channel in channels.iter_mut() {
        while bytes.next_if_eq(&b' ').is_some() {}

        let mut value: u8 = 0;
        let mut scanned = 0;
        while scanned < digits {
            let Some(digit) = bytes.peek().and_then(|b| char::from(*b).to_digit(16)) else {
                break;
            };
            // at most two digits, so this never exceeds 0xff
            value = value * 16 + digit as u8;
            bytes.next();
            scanned += 1;
        }
        if scanned == 0 {
            return None;
        }
        *channel = value;
    }

    Some(channels)
}
