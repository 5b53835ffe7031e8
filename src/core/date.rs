use chrono::NaiveDate;

use crate::BindError;

/// The fixed calendar-date pattern used on both read and write (`2024-03-05`).
pub const DATE_PATTERN: &str = "%Y-%m-%d";

/// Parses a `yyyy-MM-dd` date string read at `path`.
pub fn parse_date(text: &str, path: &str) -> Result<NaiveDate, BindError> {
    NaiveDate::parse_from_str(text, DATE_PATTERN).map_err(|_| BindError::MalformedDate {
        path: path.to_string(),
        value: text.to_string(),
    })
}

/// Formats a calendar date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}
