// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Weekday name is not one of the seven fixed values.
    InvalidWeekday(String),
    /// Availability status is not part of the fixed vocabulary.
    InvalidAvailabilityStatus(String),
    /// Transport status is not part of the fixed vocabulary.
    InvalidTransportStatus(String),
    /// Clock time is not a valid "HH:MM" value.
    InvalidClockTime(String),
    /// Officer name is empty or invalid.
    InvalidName(String),
    /// Officer badge is empty or invalid.
    InvalidBadge(String),
    /// Prisoner name is empty or invalid.
    InvalidPrisonerName(String),
    /// Time-off range has an end date before its start date.
    InvalidTimeOffRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// Officer does not exist in the roster.
    OfficerNotFound {
        /// The officer identifier that was not found.
        officer_id: i64,
    },
    /// Transport job does not exist in the schedule.
    TransportNotFound {
        /// The transport identifier that was not found.
        transport_id: i64,
    },
    /// Time-off request does not exist.
    TimeOffNotFound {
        /// The time-off identifier that was not found.
        time_off_id: i64,
    },
    /// Failed to parse a calendar date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWeekday(value) => write!(f, "Invalid weekday: '{value}'"),
            Self::InvalidAvailabilityStatus(value) => {
                write!(
                    f,
                    "Invalid availability status: '{value}'. Must be Available, Off, Training, or Sick"
                )
            }
            Self::InvalidTransportStatus(value) => {
                write!(
                    f,
                    "Invalid transport status: '{value}'. Must be Scheduled, Completed, or Canceled"
                )
            }
            Self::InvalidClockTime(value) => {
                write!(f, "Invalid clock time: '{value}'. Must be HH:MM")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidBadge(msg) => write!(f, "Invalid badge: {msg}"),
            Self::InvalidPrisonerName(msg) => write!(f, "Invalid prisoner name: {msg}"),
            Self::InvalidTimeOffRange { start, end } => {
                write!(
                    f,
                    "Time-off end date {end} is earlier than start date {start}"
                )
            }
            Self::OfficerNotFound { officer_id } => {
                write!(f, "Officer {officer_id} not found in roster")
            }
            Self::TransportNotFound { transport_id } => {
                write!(f, "Transport {transport_id} not found in schedule")
            }
            Self::TimeOffNotFound { time_off_id } => {
                write!(f, "Time-off request {time_off_id} not found")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
