//! Marker to style mapping for table rendering.
//!
//! A [`Theme`] is a plain value handed to [`Table::render`](super::Table::render),
//! so several themes can be used side by side.

use tracing::trace;

use super::marker::{CLASS_A, CLASS_F, NEGATIVE, NEUTRAL, POSITIVE};
use crate::term::Style;

const HEADER: &str = "#81858d";
const TEXT: &str = "#d0d0d0";
const STRIPE: &str = "#131313";
const WHITE: &str = "#ffffff";

const RED: &str = "#cc0000";
const ORANGE: &str = "#ff7800";
const BLUE: &str = "#1a7091";
const LIGHT_GREEN: &str = "#008a33";
const GREEN: &str = "#82cc00";
const DARK_GREEN: &str = "#209c05";

/// Styles for one kind of row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyles {
    pub text: Style,
    /// Header row and frame glyphs.
    pub header: Style,
    pub positive: Style,
    pub negative: Style,
    /// `CLASS_A` through `CLASS_F`.
    pub classes: [Style; 6],
}

impl MarkerStyles {
    /// Style for a built-in marker, `None` for anything else.
    pub fn marker(&self, marker: i32) -> Option<&Style> {
        match marker {
            NEGATIVE => Some(&self.negative),
            NEUTRAL => Some(&self.text),
            POSITIVE => Some(&self.positive),
            CLASS_A..=CLASS_F => self.classes.get((marker - CLASS_A) as usize),
            _ => None,
        }
    }

    /// Every built-in marker has a foreground color on `background`.
    fn foreground(text: Style, header: Style, background: &str) -> Self {
        let marked = |color: &str| Style::new(color, background, true);
        Self {
            text,
            header,
            positive: marked(GREEN),
            negative: marked(RED),
            classes: [
                marked(RED),
                marked(ORANGE),
                marked(BLUE),
                marked(LIGHT_GREEN),
                marked(GREEN),
                marked(DARK_GREEN),
            ],
        }
    }

    /// Markers are white text on a colored background.
    fn filled(text: Style, header: Style) -> Self {
        let filled = |color: &str| Style::new(WHITE, color, true);
        Self {
            text,
            header,
            positive: filled(LIGHT_GREEN),
            negative: filled(RED),
            classes: [
                filled(RED),
                filled(ORANGE),
                filled(BLUE),
                filled(GREEN),
                filled(LIGHT_GREEN),
                filled(DARK_GREEN),
            ],
        }
    }
}

/// Styles for regular rows and for striped (even) rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub regular: MarkerStyles,
    pub striped: MarkerStyles,
}

impl Theme {
    /// Markers shown as colored bold text.
    pub fn foreground() -> Self {
        Self {
            regular: MarkerStyles::foreground(
                Style::new(TEXT, "", false),
                Style::new(HEADER, "", true),
                "",
            ),
            striped: MarkerStyles::foreground(
                Style::new(HEADER, STRIPE, false),
                Style::new(HEADER, STRIPE, true),
                STRIPE,
            ),
        }
    }

    /// Markers shown as colored cell backgrounds.
    pub fn background() -> Self {
        Self {
            regular: MarkerStyles::filled(
                Style::new(TEXT, "", false),
                Style::new(HEADER, "", true),
            ),
            striped: MarkerStyles::filled(
                Style::new(HEADER, STRIPE, false),
                Style::new(HEADER, STRIPE, true),
            ),
        }
    }

    pub fn styles(&self, striped: bool) -> &MarkerStyles {
        if striped {
            &self.striped
        } else {
            &self.regular
        }
    }

    /// Style for `marker`, falling back to the row's text style.
    pub fn style_for(&self, marker: i32, striped: bool) -> &Style {
        let styles = self.styles(striped);
        styles.marker(marker).unwrap_or_else(|| {
            trace!(marker, striped, "Unknown marker, using text style");
            &styles.text
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::foreground()
    }
}
