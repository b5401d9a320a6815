//! ANSI 24-bit styling and fixed-width text layout.
//!
//! Everything in here is synchronous and side-effect free apart from the
//! output buffer of the current call:
//! - `Color` and `Style`: immutable values, freely shareable
//! - `escape`: per-call SGR sequence writer
//! - `measure`: visible length of text with embedded sequences
//! - `layout` and `grid`: padding, alignment and multi-column blocks
//! - `matrix`: a fixed-size character canvas

mod color;
pub mod escape;
mod grid;
mod layout;
pub mod matrix;
mod measure;
pub mod palette;
mod style;

pub use color::{hex, Color};
pub use grid::{Grid, GridAlign, GridCell, GridRow};
pub use layout::{format_string, pad, write_formatted, Alignment};
pub use matrix::{CharMatrix, MatrixCell};
pub use measure::{strip_escapes, visible_length};
pub use style::{Style, BACKGROUND, BOLD, FOREGROUND};
