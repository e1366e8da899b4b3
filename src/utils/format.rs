use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Left-pad `s` with spaces until its display width reaches `width`.
/// Arabic glyphs and other wide text make byte-length padding drift,
/// so padding is computed from the rendered width.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - current), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_formatting() {
        let t = NaiveTime::from_hms_opt(4, 5, 0).unwrap();
        assert_eq!(format_time(t), "04:05");
    }

    #[test]
    fn padding_counts_display_width() {
        assert_eq!(pad_to_width("ab", 4), "  ab");
        assert_eq!(pad_to_width("abcd", 2), "abcd");
    }
}
