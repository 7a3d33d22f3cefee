//! Game date parsing and display
//!
//! Dates arrive as `YYYY-MM-DD` and are shown as `MM/DD/YYYY`.

use chrono::NaiveDate;

use crate::error::DomainError;

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// The string is split on `-` into year, month and day. The month is
/// 1-based, as written. Anything that does not name a real day is rejected.
pub fn parse_game_date(value: &str) -> Result<NaiveDate, DomainError> {
    let invalid = || {
        DomainError::Validation(format!(
            "Invalid game date '{}': expected YYYY-MM-DD",
            value
        ))
    };

    let parts: Vec<&str> = value.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Render a date the way game listings show it
pub fn format_game_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
