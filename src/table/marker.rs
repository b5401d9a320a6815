//! Semantic marker codes carried by table cells.
//!
//! A marker selects a color class independent of the cell text. Codes
//! from [`CUSTOM_BASE`] upwards refer to styles registered on the table
//! with [`Table::add_style`](super::Table::add_style).

pub const NEGATIVE: i32 = -1;
pub const NEUTRAL: i32 = 0;
pub const POSITIVE: i32 = 1;
pub const CLASS_A: i32 = 2;
pub const CLASS_B: i32 = 3;
pub const CLASS_C: i32 = 4;
pub const CLASS_D: i32 = 5;
pub const CLASS_E: i32 = 6;
pub const CLASS_F: i32 = 7;

/// First marker code handed out for table-local styles.
pub const CUSTOM_BASE: i32 = 20;

/// Marker for a signed quantity: positive, negative or neutral at zero.
pub fn for_sign(value: f64) -> i32 {
    if value > 0.0 {
        POSITIVE
    } else if value < 0.0 {
        NEGATIVE
    } else {
        NEUTRAL
    }
}
