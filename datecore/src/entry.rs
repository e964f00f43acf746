//! Date text entry for hosting shells.
//!
//! The calendar engine only sees well-formed dates. Anything a user types is
//! validated here first, and failures surface as messages fit for a status
//! bar rather than reaching the date math.

use chrono::NaiveDate;
use thiserror::Error;

/// Accepted entry format (ISO year-month-day).
pub const ENTRY_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum EntryError {
    #[error("enter a date as YYYY-MM-DD")]
    Empty,
    #[error("not a calendar date: {0}")]
    Format(#[from] chrono::format::ParseError),
}

pub type Result<T> = std::result::Result<T, EntryError>;

/// Parse user-typed text as a calendar date.
/// Strict: 2025-02-30 fails, 2024-02-29 parses.
pub fn parse_entry(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EntryError::Empty);
    }
    Ok(NaiveDate::parse_from_str(trimmed, ENTRY_FORMAT)?)
}

/// Format a date the way [`parse_entry`] accepts it.
pub fn format_entry(date: NaiveDate) -> String {
    date.format(ENTRY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        let date = parse_entry("2025-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        // Surrounding whitespace is the user's problem, not an error.
        assert_eq!(parse_entry("  2025-03-15 ").unwrap(), date);
        assert!(parse_entry("2024-02-29").is_ok());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(matches!(parse_entry("2025-02-29"), Err(EntryError::Format(_))));
        assert!(matches!(parse_entry("2025-13-01"), Err(EntryError::Format(_))));
        assert!(matches!(parse_entry("2025-04-31"), Err(EntryError::Format(_))));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(parse_entry(""), Err(EntryError::Empty)));
        assert!(matches!(parse_entry("   "), Err(EntryError::Empty)));
        assert!(matches!(parse_entry("tomorrow"), Err(EntryError::Format(_))));
        assert!(matches!(parse_entry("03/15/2025"), Err(EntryError::Format(_))));
    }

    #[test]
    fn test_format_round_trips() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(format_entry(date), "2025-02-01");
        assert_eq!(parse_entry(&format_entry(date)).unwrap(), date);
    }

    #[test]
    fn test_error_messages_fit_a_status_bar() {
        assert_eq!(EntryError::Empty.to_string(), "enter a date as YYYY-MM-DD");
        let err = parse_entry("garbage").unwrap_err();
        assert!(err.to_string().starts_with("not a calendar date"));
    }
}
