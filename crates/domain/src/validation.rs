// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Officer, OfficerId, TimeOffRequest, TransportJob};

/// Validates that an officer's basic field constraints are met.
///
/// This function checks that required fields are not empty.
/// It does NOT check identifier uniqueness (that requires context).
///
/// # Arguments
///
/// * `officer` - The officer to validate
///
/// # Errors
///
/// Returns an error if:
/// - The officer's name is empty
/// - The officer's badge is empty
pub fn validate_officer_fields(officer: &Officer) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if officer.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: badge must not be empty
    if officer.badge.trim().is_empty() {
        return Err(DomainError::InvalidBadge(String::from(
            "Badge cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a transport job's basic field constraints are met.
///
/// # Arguments
///
/// * `job` - The transport job to validate
///
/// # Errors
///
/// Returns an error if the prisoner name is empty.
pub fn validate_job_fields(job: &TransportJob) -> Result<(), DomainError> {
    // Rule: prisoner name must not be empty
    if job.prisoner_name.trim().is_empty() {
        return Err(DomainError::InvalidPrisonerName(String::from(
            "Prisoner name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a time-off request's date range is well-formed.
///
/// The range is inclusive on both ends; a single-day request has
/// `start == end`.
///
/// # Arguments
///
/// * `request` - The time-off request to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeOffRange` if the end date is earlier
/// than the start date.
pub fn validate_time_off_range(request: &TimeOffRequest) -> Result<(), DomainError> {
    if request.end < request.start {
        return Err(DomainError::InvalidTimeOffRange {
            start: request.start,
            end: request.end,
        });
    }
    Ok(())
}

/// Validates that an officer exists in the roster.
///
/// This is a read-only validation used before accepting references to an
/// officer (e.g. from a time-off request).
///
/// # Arguments
///
/// * `officer_id` - The officer identifier to look up
/// * `officers` - The roster to check against
///
/// # Errors
///
/// Returns `DomainError::OfficerNotFound` if no roster entry carries the
/// identifier.
pub fn validate_officer_exists(
    officer_id: OfficerId,
    officers: &[Officer],
) -> Result<(), DomainError> {
    if !officers
        .iter()
        .any(|officer| officer.officer_id == officer_id)
    {
        return Err(DomainError::OfficerNotFound {
            officer_id: officer_id.value(),
        });
    }
    Ok(())
}
