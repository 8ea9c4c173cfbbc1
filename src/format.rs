//! Display Formatting
//!
//! Dates, money and short previews as shown on cards.

use chrono::{Datelike, NaiveDate};

/// Characters of post content shown in a delete confirmation
pub const PREVIEW_CHARS: usize = 50;

/// Calendar date from an ISO date or timestamp ("2024-05-01", "2024-05-01T10:00:00Z")
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Short date ("5/1/2024"); unparseable input is shown as-is
pub fn short_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        None => raw.to_string(),
    }
}

pub fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Dollar amount with two decimals
pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// First `max` characters followed by "..." when truncated
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Uppercased first letter for an avatar bubble
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// "10:00 - 11:30", or just the start when there is no end time
pub fn time_range(start: &str, end: Option<&str>) -> String {
    match end.filter(|e| !e.is_empty()) {
        Some(end) => format!("{} - {}", start, end),
        None => start.to_string(),
    }
}

/// Hours with two decimals from a seconds total
pub fn hours_from_seconds(total_seconds: f64) -> String {
    format!("{:.2}", total_seconds / 3600.0)
}

/// Whole seconds with thousands separators ("12,345")
pub fn grouped_seconds(total_seconds: f64) -> String {
    let digits = (total_seconds.max(0.0).round() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_date("2024-05-01"), expected);
        assert_eq!(parse_date("2024-05-01T10:30:00.123456"), expected);
        assert_eq!(parse_date("2024-05-01T10:30:00.000Z"), expected);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-05-01"), "5/1/2024");
        assert_eq!(short_date("not a date"), "not a date");
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("short", PREVIEW_CHARS), "short");
        let long = "é".repeat(60);
        let cut = preview(&long, PREVIEW_CHARS);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(money(30.0), "$30.00");
        assert_eq!(avatar_initial("bob"), "B");
        assert_eq!(avatar_initial(""), "?");
        assert_eq!(time_range("10:00", Some("11:00")), "10:00 - 11:00");
        assert_eq!(time_range("10:00", Some("")), "10:00");
        assert_eq!(time_range("10:00", None), "10:00");
        assert_eq!(hours_from_seconds(5400.0), "1.50");
        assert_eq!(grouped_seconds(1234567.0), "1,234,567");
        assert_eq!(grouped_seconds(999.0), "999");
    }
}
