//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Terminal columns taken by `s` (Hangul syllables count as two).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with spaces on the right up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Center `s` inside `width` terminal columns.
pub fn pad_center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// `present/total` followed by a rounded percentage.
pub fn ratio(present: usize, total: usize) -> String {
    if total == 0 {
        return "0/0".to_string();
    }
    let pct = (present * 100 + total / 2) / total;
    format!("{}/{} ({}%)", present, total, pct)
}
