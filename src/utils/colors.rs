/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const YELLOW: &str = "\x1b[33m";

/// Grey for non-attendance rows, blue for Saturday, red for Sunday.
pub fn color_for_weekday(weekday: &str, non_attendance: bool) -> &'static str {
    match weekday {
        "土" => BLUE,
        "日" => RED,
        _ if non_attendance => GREY,
        _ => RESET,
    }
}

/// Grey for the no-data sentinel and zero durations.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "---" || v == "0:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Break values reported in the thread are highlighted.
pub fn colorize_break(value: &str, has_notice: bool) -> String {
    if has_notice {
        format!("{YELLOW}{value}{RESET}")
    } else {
        colorize_optional(value)
    }
}

pub fn colorize_total(minutes: i64) -> String {
    if minutes > 0 {
        format!("{GREEN}{}{RESET}", crate::core::time_math::format_minutes(minutes))
    } else {
        crate::core::time_math::format_minutes(minutes)
    }
}
