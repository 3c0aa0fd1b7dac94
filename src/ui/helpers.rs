//! Shared rendering utilities.
//!
//! Text measurement here counts characters, not bytes, so board names with
//! non-ASCII characters keep the layout aligned.

use chrono::{DateTime, NaiveDate};

/// Moves the terminal cursor. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of `text` in terminal cells.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use tierlist::ui::helpers::truncate;
///
/// assert_eq!(truncate("Raspberry Pi 5", 20), "Raspberry Pi 5");
/// assert_eq!(truncate("Raspberry Pi Compute Module 4", 12), "Raspberry...");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{}...", kept.trim_end())
}

/// Pads `text` with spaces to exactly `width` cells, truncating if longer.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(text_width(&text));
    format!("{text}{}", " ".repeat(padding))
}

/// Renders a catalog review date in long form, e.g. `January 5, 2024`.
///
/// Accepts plain dates (`2024-01-05`) and RFC 3339 timestamps. Anything else is
/// returned unchanged.
#[must_use]
pub fn format_review_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()));

    date.map_or_else(|| raw.to_string(), |date| date.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_dates_render_long_form() {
        assert_eq!(format_review_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_review_date("2023-11-30T10:00:00Z"), "November 30, 2023");
    }

    #[test]
    fn unparsable_dates_are_verbatim() {
        assert_eq!(format_review_date("soon"), "soon");
        assert_eq!(format_review_date(""), "");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Orange Pi 5 Plus", 9), "Orange...");
        assert_eq!(truncate("Ünïcödé", 7), "Ünïcödé");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdefgh", 6), "abc...");
    }
}
