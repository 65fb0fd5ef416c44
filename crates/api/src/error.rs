// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use escort_roster::CoreError;
use escort_roster_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Bulk CSV input could not be parsed or validated.
    InvalidCsvFormat {
        /// A human-readable description of the problem.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        Self::InvalidCsvFormat {
            reason: format!("CSV parse error: {err}"),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidWeekday(value) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("Invalid weekday: '{value}'"),
        },
        DomainError::InvalidAvailabilityStatus(value) => ApiError::InvalidInput {
            field: String::from("availability"),
            message: format!(
                "Invalid availability status: '{value}'. Must be Available, Off, Training, or Sick"
            ),
        },
        DomainError::InvalidTransportStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!(
                "Invalid transport status: '{value}'. Must be Scheduled, Completed, or Canceled"
            ),
        },
        DomainError::InvalidClockTime(value) => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Invalid clock time: '{value}'. Must be HH:MM"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidBadge(msg) => ApiError::InvalidInput {
            field: String::from("badge"),
            message: msg,
        },
        DomainError::InvalidPrisonerName(msg) => ApiError::InvalidInput {
            field: String::from("prisoner_name"),
            message: msg,
        },
        DomainError::InvalidTimeOffRange { start, end } => ApiError::DomainRuleViolation {
            rule: String::from("time_off_range"),
            message: format!("Time-off end date {end} is earlier than start date {start}"),
        },
        DomainError::OfficerNotFound { officer_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Officer"),
            message: format!("Officer {officer_id} does not exist"),
        },
        DomainError::TransportNotFound { transport_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Transport"),
            message: format!("Transport {transport_id} does not exist"),
        },
        DomainError::TimeOffNotFound { time_off_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Time-off request"),
            message: format!("Time-off request {time_off_id} does not exist"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
