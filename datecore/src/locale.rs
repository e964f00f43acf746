//! Fixed-locale names and labels.
//!
//! One locale (US English), hand-rolled tables. Month and weekday names are
//! proper nouns; affordance strings are lowercase like the rest of the slow
//! computer UI.

use chrono::{Datelike, NaiveDate, Weekday};

/// Column headers for the picker grid, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Spoken label for the previous-month affordance.
pub const PREVIOUS_MONTH: &str = "previous month";
/// Spoken label for the next-month affordance.
pub const NEXT_MONTH: &str = "next month";
/// Spoken label for the go-to-today affordance.
pub const GO_TO_TODAY: &str = "go to today";

/// Suffix appended to a day label when the day is today.
pub const MARK_TODAY: &str = ", today";
/// Suffix appended when the day is the current selection.
pub const MARK_SELECTED: &str = ", selected";
/// Suffix appended when the day lies outside the displayed month.
pub const MARK_OUTSIDE_MONTH: &str = ", different month";

/// Name of the date's month.
pub fn month_name(date: NaiveDate) -> &'static str {
    match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Name of the date's weekday.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Year as text, e.g. "2025".
pub fn year_string(date: NaiveDate) -> String {
    format!("{}", date.year())
}

/// Month heading, e.g. "February 2025".
pub fn month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), year_string(date))
}

/// Spoken-friendly full date, e.g. "Saturday, February 1, 2025".
pub fn day_label(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_name(date),
        month_name(date),
        date.day(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_names_cover_the_year() {
        assert_eq!(month_name(d(2025, 1, 1)), "January");
        assert_eq!(month_name(d(2025, 6, 30)), "June");
        assert_eq!(month_name(d(2025, 12, 31)), "December");
    }

    #[test]
    fn test_month_year_heading() {
        assert_eq!(month_year(d(2025, 2, 1)), "February 2025");
        assert_eq!(month_year(d(1999, 12, 25)), "December 1999");
        assert_eq!(year_string(d(2025, 2, 1)), "2025");
    }

    #[test]
    fn test_day_label_is_spoken_friendly() {
        assert_eq!(day_label(d(2025, 2, 1)), "Saturday, February 1, 2025");
        assert_eq!(day_label(d(2025, 3, 15)), "Saturday, March 15, 2025");
        assert_eq!(day_label(d(2024, 2, 29)), "Thursday, February 29, 2024");
    }

    #[test]
    fn test_weekday_headers_start_on_sunday() {
        assert_eq!(WEEKDAY_HEADERS[0], "Su");
        assert_eq!(WEEKDAY_HEADERS[6], "Sa");
        // Jan 26 2025 is a Sunday, the first cell of February 2025's grid.
        assert_eq!(weekday_name(d(2025, 1, 26)), "Sunday");
    }
}
