//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad on the right up to `width` terminal columns ("días" is 4 wide, 5 bytes).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Horizontal rule made of the configured separator.
pub fn rule(separator: &str, width: usize) -> String {
    let unit = if separator.is_empty() { "-" } else { separator };
    unit.repeat(width.div_ceil(UnicodeWidthStr::width(unit).max(1)))
}
