//! Box-drawing glyph sets for table frames.

/// Glyphs used to frame a table.
///
/// `size` is the display width of a vertical glyph, 0 for borderless
/// tables where only the header separator is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub size: usize,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub cross: &'static str,
    pub top_junction: &'static str,
    pub bottom_junction: &'static str,
    pub left_junction: &'static str,
    pub right_junction: &'static str,
}

impl Border {
    pub const DEFAULT: Border = Border {
        size: 1,
        horizontal: "─",
        vertical: "│",
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
        cross: "┼",
        top_junction: "┬",
        bottom_junction: "┴",
        left_junction: "├",
        right_junction: "┤",
    };

    pub const HIDDEN: Border = Border {
        size: 0,
        horizontal: "─",
        vertical: "",
        top_left: "",
        top_right: "",
        bottom_left: "",
        bottom_right: "",
        cross: "",
        top_junction: "",
        bottom_junction: "",
        left_junction: "",
        right_junction: "",
    };

    pub const ROUNDED: Border = Border {
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
        ..Border::DEFAULT
    };

    pub const THICK: Border = Border {
        size: 1,
        horizontal: "━",
        vertical: "┃",
        top_left: "┏",
        top_right: "┓",
        bottom_left: "┗",
        bottom_right: "┛",
        cross: "╋",
        top_junction: "┳",
        bottom_junction: "┻",
        left_junction: "┣",
        right_junction: "┫",
    };

    pub const DOUBLE: Border = Border {
        size: 1,
        horizontal: "═",
        vertical: "║",
        top_left: "╔",
        top_right: "╗",
        bottom_left: "╚",
        bottom_right: "╝",
        cross: "╬",
        top_junction: "╦",
        bottom_junction: "╩",
        left_junction: "╠",
        right_junction: "╣",
    };

    /// Whether the table gets a frame around it.
    pub fn is_framed(&self) -> bool {
        self.size > 0
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::DEFAULT
    }
}
