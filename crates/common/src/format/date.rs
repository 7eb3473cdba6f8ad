//! Date display helpers
//!
//! Snapshot dates arrive as ISO-like strings (`2025-01-02`,
//! `2025-01-02T09:30:00+09:00`, `2025-01-02 09:30:00`).

use chrono::NaiveDate;

/// Return the date portion of an ISO-like timestamp string.
///
/// Everything from the first `T` or space onward is dropped. Blank input
/// yields an empty string.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use orgboard_common::format::date_part;
///
/// assert_eq!(date_part("2025-01-02T09:30:00+09:00"), "2025-01-02");
/// assert_eq!(date_part("2025-01-02 09:30:00"), "2025-01-02");
/// assert_eq!(date_part("  "), "");
/// # }
/// ```
pub fn date_part(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.split(['T', ' ']).next().unwrap_or(trimmed)
}

/// Reformat an ISO-like date string as `YYMMDD`.
///
/// Returns `None` when the date portion is not a valid `YYYY-MM-DD` date.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use orgboard_common::format::format_yymmdd;
///
/// assert_eq!(format_yymmdd("2025-01-02T09:30:00"), Some("250102".to_string()));
/// assert_eq!(format_yymmdd("not a date"), None);
/// # }
/// ```
pub fn format_yymmdd(raw: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date_part(raw), "%Y-%m-%d").ok()?;
    Some(date.format("%y%m%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_part_keeps_plain_dates() {
        assert_eq!(date_part("2024-12-31"), "2024-12-31");
    }

    #[test]
    fn yymmdd_rejects_impossible_dates() {
        assert_eq!(format_yymmdd("2025-02-30"), None);
        assert_eq!(format_yymmdd(""), None);
    }

    #[test]
    fn yymmdd_handles_space_separated_timestamps() {
        assert_eq!(format_yymmdd(" 2026-03-09 18:00:00 "), Some("260309".to_string()));
    }
}
