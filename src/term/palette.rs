//! Named terminal colors as hex strings.

pub const BLACK: &str = "#0c0c0c";
pub const RED: &str = "#cc0000";
pub const GREEN: &str = "#4e9a06";
pub const YELLOW: &str = "#c4a000";
pub const BLUE: &str = "#3465a4";
pub const PURPLE: &str = "#75507b";
pub const CYAN: &str = "#06989a";
pub const WHITE: &str = "#d3d7cf";
pub const GRAY: &str = "#81858d";
pub const BRIGHT_BLACK: &str = "#555753";
pub const BRIGHT_RED: &str = "#ef2929";
pub const BRIGHT_GREEN: &str = "#8ae234";
pub const BRIGHT_YELLOW: &str = "#fce94f";
pub const BRIGHT_BLUE: &str = "#729fcf";
pub const BRIGHT_PURPLE: &str = "#ad7fa8";
pub const BRIGHT_CYAN: &str = "#34e2e2";
pub const BRIGHT_WHITE: &str = "#eeeeec";
pub const BACKGROUND: &str = "#0c0c0c";
pub const BACKGROUND_ODD: &str = "#1c1c1c";
pub const FOREGROUND: &str = "#eeeeec";
