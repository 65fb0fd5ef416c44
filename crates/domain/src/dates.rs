// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-only parsing and formatting.
//!
//! All calendar dates in the system are date-only values; comparisons never
//! involve a time zone, so the same calendar date yields the same weekday and
//! range-containment result everywhere.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The canonical `YYYY-MM-DD` date format.
const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in that format.
pub fn parse_iso_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
