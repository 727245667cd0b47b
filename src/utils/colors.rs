/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder for an empty date cell.
pub fn or_dashes(value: &str) -> String {
    if value.trim().is_empty() {
        "--".to_string()
    } else {
        value.to_string()
    }
}

/// Zero totals in grey, non-zero in green.
pub fn colorize_total(value: &str, is_zero: bool) -> String {
    if is_zero {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}

/// Derived rows are dimmed; editable ones keep the terminal color.
pub fn colorize_row(value: &str, editable: bool) -> String {
    if editable {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
