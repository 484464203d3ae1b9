/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Percentage color:
/// \>= 75 → green
/// \>= 50 → yellow
/// otherwise → red
pub fn color_for_percentage(p: f64, total: usize) -> &'static str {
    if total == 0 {
        GREY
    } else if p >= 75.0 {
        GREEN
    } else if p >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Wrap `s` in `color` only when colors are enabled.
pub fn paint(s: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{s}{RESET}")
    } else {
        s.to_string()
    }
}
