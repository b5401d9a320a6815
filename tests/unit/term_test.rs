//! Unit tests for styles, escape measuring and text layout

use termtable::term::{format_string, strip_escapes, visible_length, Alignment, GridAlign};
use termtable::{Color, Grid, GridCell, GridRow, Style};

fn sample_styles() -> Vec<Style> {
    vec![
        Style::plain(),
        Style::new("", "", true),
        Style::new("#ff0000", "", false),
        Style::new("", "#00ff00", true),
        Style::new("#010203", "#fffefd", true),
        Style::new("#abc", "not a color", false),
    ]
}

const SAMPLES: &[&str] = &["", "x", "hello world", "äöü ✓", "■ ⭢ ⭡", "  spaced  "];

// ============================================================================
// Styles
// ============================================================================

#[test]
fn bold_only_style() {
    assert_eq!(Style::new("", "", true).convert("x"), "\x1b[1mx\x1b[0m");
}

#[test]
fn attributes_are_bold_foreground_background() {
    let style = Style::new("#010203", "#0a0b0c", true);
    assert_eq!(
        style.convert("t"),
        "\x1b[1;38;2;1;2;3;48;2;10;11;12mt\x1b[0m"
    );
}

#[test]
fn empty_style_still_wraps_text() {
    assert_eq!(Style::plain().convert("x"), "\x1b[mx\x1b[0m");
}

#[test]
fn conversion_is_deterministic() {
    for style in sample_styles() {
        for text in SAMPLES {
            assert_eq!(style.convert(text), style.convert(text));
        }
    }
}

#[test]
fn styling_never_changes_visible_length() {
    for style in sample_styles() {
        for text in SAMPLES {
            let styled = style.convert(text);
            assert_eq!(visible_length(&styled), visible_length(text), "{styled:?}");
            assert_eq!(strip_escapes(&styled), *text);
        }
    }
}

#[test]
fn nested_styles_strip_to_payload() {
    let inner = Style::new("#ff0000", "", true).convert("in");
    let outer = Style::new("", "#000000", false).convert(&format!("[{inner}]"));
    assert_eq!(strip_escapes(&outer), "[in]");
    assert_eq!(visible_length(&outer), 4);
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn short_hex_has_one_digit_per_channel() {
    assert_eq!(Color::hex("#abc"), Color::rgb(10, 11, 12));
    assert_eq!(Color::hex("#1a2b3c"), Color::rgb(26, 43, 60));
}

#[test]
fn malformed_hex_is_black() {
    for input in ["", "red", "#", "#zzzzzz"] {
        assert_eq!(Color::hex(input), Color::default(), "{input:?}");
    }
}

#[test]
fn display_round_trips_through_hex() {
    for color in [
        Color::rgb(0, 0, 0),
        Color::rgb(255, 128, 1),
        Color::rgb(18, 52, 86),
    ] {
        assert_eq!(Color::hex(&color.to_string()), color);
    }
}

#[test]
fn strict_parse_rejects_what_hex_forgives() {
    assert!("#12345".parse::<Color>().is_err());
    assert!("123456".parse::<Color>().is_err());
    assert_eq!("#123456".parse::<Color>().ok(), Some(Color::rgb(0x12, 0x34, 0x56)));
}

// ============================================================================
// Measuring and padding
// ============================================================================

#[test]
fn unterminated_sequence_counts_as_text() {
    assert_eq!(visible_length("\x1b[31"), 4);
    assert_eq!(visible_length("ab\x1b[1mcd"), 4);
}

#[test]
fn overlong_text_is_not_truncated() {
    assert_eq!(format_string("abcdef", 3, Alignment::Left), "abcdef");
    assert_eq!(format_string("abcdef", 3, Alignment::Center), "abcdef");
}

#[test]
fn center_puts_odd_space_right() {
    assert_eq!(format_string("ab", 5, Alignment::Center), " ab  ");
    assert_eq!(format_string("ab", 6, Alignment::Center), "  ab  ");
}

#[test]
fn padding_measures_styled_text() {
    let styled = Style::new("#ff0000", "", false).convert("ab");
    let padded = format_string(&styled, 6, Alignment::Right);
    assert_eq!(visible_length(&padded), 6);
    assert!(padded.ends_with(&styled));
}

#[test]
fn padded_width_is_never_shorter_than_requested() {
    for text in SAMPLES {
        for width in 0..12 {
            for align in [Alignment::Left, Alignment::Right, Alignment::Center] {
                let out = format_string(text, width, align);
                assert_eq!(visible_length(&out), width.max(visible_length(text)));
            }
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

#[test]
fn grid_fills_short_columns() {
    let grid = Grid::new().push(
        GridRow::new(0)
            .push(GridCell::plain(4, "ab\nc"))
            .push(GridCell::plain(3, "x")),
    );
    assert_eq!(grid.render(), "ab  x  \nc      \n");
}

#[test]
fn grid_right_alignment_inside_padding() {
    let grid = Grid::new().push(GridRow::new(1).push(GridCell::plain(5, "7").align(GridAlign::Right)));
    assert_eq!(grid.render(), "   7 \n");
}

#[test]
fn styled_grid_lines_keep_cell_width() {
    let style = Style::new("#00ff00", "#000000", true);
    let grid = Grid::new().push(
        GridRow::new(1)
            .push(GridCell::styled(style, 8, "ok\nfail"))
            .push(GridCell::plain(4, "x")),
    );
    let out = grid.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert_eq!(visible_length(line), 12, "{line:?}");
    }
    assert!(out.contains(&style.convert("ok    ")));
}
