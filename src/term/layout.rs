//! Fixed-width padding and alignment of single text tokens.

use super::measure::visible_length;

/// Horizontal placement of text inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// Pad `text` to `width` visible columns.
///
/// Text longer than `width` comes back unpadded and untruncated.
pub fn format_string(text: &str, width: usize, align: Alignment) -> String {
    let mut out = String::with_capacity(text.len() + width);
    write_formatted(&mut out, text, width, align);
    out
}

/// [`format_string`] writing into an existing buffer.
pub fn write_formatted(out: &mut String, text: &str, width: usize, align: Alignment) {
    let free = width.saturating_sub(visible_length(text));
    match align {
        Alignment::Left => {
            out.push_str(text);
            pad(out, free);
        }
        Alignment::Right => {
            pad(out, free);
            out.push_str(text);
        }
        Alignment::Center => {
            // odd leftovers go to the right
            let left = free / 2;
            pad(out, left);
            out.push_str(text);
            pad(out, free - left);
        }
    }
}

/// Append `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}
