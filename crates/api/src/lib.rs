// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the escort roster system.
//!
//! Operations in this crate take the current state snapshot and a string-
//! typed request DTO, parse and validate at the boundary, drive the core
//! reducer, and translate every domain/core error into the API error
//! taxonomy. Callers persist the returned snapshot and surface the notice.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod csv_export;
mod csv_import;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_export::{EXPORT_HEADERS, ExportResult, export_transports};
pub use csv_import::{CsvRowError, parse_officer_rows, parse_transport_rows};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    AvailabilityForm, ChangeStatusRequest, OfficerView, RecommendRotationRequest, RotationAdvice,
    RotationCandidateView, SaveOfficerRequest, SaveTimeOffRequest, SaveTransportRequest,
    TimeOffView, TransportView, clock_or_empty, parse_clock_field, parse_date_field,
};

use escort_roster::{Command, RosterState, TransitionResult, apply};
use escort_roster_domain::{
    DomainError, Officer, OfficerId, RotationCandidate, TimeOffId, TimeOffRequest, TransportId,
    TransportJob, TransportStatus, Weekday, format_iso_date, recommend,
};
use std::str::FromStr;

/// Lists the officer roster.
#[must_use]
pub fn list_officers(state: &RosterState) -> Vec<OfficerView> {
    state.officers.iter().map(OfficerView::from_domain).collect()
}

/// Adds a new officer to the roster.
///
/// # Errors
///
/// Returns an error if the availability strings or officer fields are
/// invalid.
pub fn add_officer(
    state: &RosterState,
    request: &SaveOfficerRequest,
) -> Result<TransitionResult, ApiError> {
    let availability = request.availability.parse()?;
    apply(
        state,
        Command::AddOfficer {
            name: request.name.clone(),
            badge: request.badge.clone(),
            contact: request.contact.clone(),
            availability,
        },
    )
    .map_err(translate_core_error)
}

/// Updates an existing officer.
///
/// Transport statistics are owned by the reconciler, so the stored
/// last-transport date and count carry over unchanged.
///
/// # Errors
///
/// Returns an error if the officer does not exist or the request fields are
/// invalid.
pub fn update_officer(
    state: &RosterState,
    officer_id: i64,
    request: &SaveOfficerRequest,
) -> Result<TransitionResult, ApiError> {
    let id: OfficerId = OfficerId::new(officer_id);
    let stored: &Officer = state
        .officers
        .iter()
        .find(|officer| officer.officer_id == id)
        .ok_or_else(|| translate_domain_error(DomainError::OfficerNotFound { officer_id }))?;

    let officer: Officer = Officer {
        officer_id: id,
        name: request.name.clone(),
        badge: request.badge.clone(),
        contact: request.contact.clone(),
        last_transport: stored.last_transport,
        total_transports: stored.total_transports,
        availability: request.availability.parse()?,
    };

    apply(state, Command::UpdateOfficer { officer }).map_err(translate_core_error)
}

/// Permanently removes an officer from the roster.
///
/// # Errors
///
/// Returns an error if the officer does not exist.
pub fn delete_officer(state: &RosterState, officer_id: i64) -> Result<TransitionResult, ApiError> {
    apply(
        state,
        Command::DeleteOfficer {
            officer_id: OfficerId::new(officer_id),
        },
    )
    .map_err(translate_core_error)
}

/// Lists transport jobs, optionally filtered by status.
///
/// The archive view is the `Completed` filter.
///
/// # Errors
///
/// Returns an error if the status filter is not part of the vocabulary.
pub fn list_transports(
    state: &RosterState,
    status_filter: Option<&str>,
) -> Result<Vec<TransportView>, ApiError> {
    let filter: Option<TransportStatus> = match status_filter {
        Some(value) => Some(TransportStatus::from_str(value).map_err(translate_domain_error)?),
        None => None,
    };

    Ok(state
        .schedule
        .iter()
        .filter(|job| filter.is_none_or(|status| job.status == status))
        .map(TransportView::from_domain)
        .collect())
}

/// Schedules a new transport job.
///
/// The request's status and actual-time fields are ignored: new jobs start
/// `Scheduled` with unset actual times.
///
/// # Errors
///
/// Returns an error if the date, time, or job fields are invalid.
pub fn schedule_transport(
    state: &RosterState,
    request: &SaveTransportRequest,
) -> Result<TransitionResult, ApiError> {
    let date = parse_date_field(&request.date)?;
    let scheduled_pickup_time = parse_clock_field(&request.scheduled_pickup_time)?;

    apply(
        state,
        Command::ScheduleTransport {
            date,
            prisoner_name: request.prisoner_name.clone(),
            prisoner_id: request.prisoner_id.clone(),
            pickup: request.pickup.clone(),
            destination: request.destination.clone(),
            officers: request.officers.clone(),
            notes: request.notes.clone(),
            scheduled_pickup_time,
        },
    )
    .map_err(translate_core_error)
}

/// Updates an existing transport job wholesale.
///
/// An update that crosses the `Completed` boundary reconciles officer
/// statistics as part of the same transition.
///
/// # Errors
///
/// Returns an error if the job does not exist or any request field is
/// invalid.
pub fn update_transport(
    state: &RosterState,
    transport_id: i64,
    request: &SaveTransportRequest,
) -> Result<TransitionResult, ApiError> {
    let status: TransportStatus =
        TransportStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let job: TransportJob = TransportJob {
        transport_id: TransportId::new(transport_id),
        date: parse_date_field(&request.date)?,
        prisoner_name: request.prisoner_name.clone(),
        prisoner_id: request.prisoner_id.clone(),
        pickup: request.pickup.clone(),
        destination: request.destination.clone(),
        officers: request.officers.clone(),
        status,
        notes: request.notes.clone(),
        scheduled_pickup_time: parse_clock_field(&request.scheduled_pickup_time)?,
        actual_pickup_time: parse_clock_field(&request.actual_pickup_time)?,
        actual_dropoff_time: parse_clock_field(&request.actual_dropoff_time)?,
    };

    apply(state, Command::UpdateTransport { job }).map_err(translate_core_error)
}

/// Moves a transport job to a new lifecycle status.
///
/// # Errors
///
/// Returns an error if the job does not exist or the status string is not
/// part of the vocabulary.
pub fn change_transport_status(
    state: &RosterState,
    transport_id: i64,
    request: &ChangeStatusRequest,
) -> Result<TransitionResult, ApiError> {
    let new_status: TransportStatus =
        TransportStatus::from_str(&request.status).map_err(translate_domain_error)?;

    apply(
        state,
        Command::ChangeTransportStatus {
            transport_id: TransportId::new(transport_id),
            new_status,
        },
    )
    .map_err(translate_core_error)
}

/// Permanently removes a transport job.
///
/// Statistics previously applied on completion are not reversed.
///
/// # Errors
///
/// Returns an error if the job does not exist.
pub fn delete_transport(
    state: &RosterState,
    transport_id: i64,
) -> Result<TransitionResult, ApiError> {
    apply(
        state,
        Command::DeleteTransport {
            transport_id: TransportId::new(transport_id),
        },
    )
    .map_err(translate_core_error)
}

/// Lists time-off requests with resolved officer names.
#[must_use]
pub fn list_time_off(state: &RosterState) -> Vec<TimeOffView> {
    state
        .time_off
        .iter()
        .map(|request| TimeOffView::from_domain(request, state))
        .collect()
}

/// Adds a time-off request.
///
/// # Errors
///
/// Returns an error if the officer does not exist, a date is invalid, or
/// the range is inverted.
pub fn add_time_off(
    state: &RosterState,
    request: &SaveTimeOffRequest,
) -> Result<TransitionResult, ApiError> {
    apply(
        state,
        Command::AddTimeOff {
            officer_id: OfficerId::new(request.officer_id),
            start: parse_date_field(&request.start)?,
            end: parse_date_field(&request.end)?,
            reason: request.reason.clone(),
        },
    )
    .map_err(translate_core_error)
}

/// Updates an existing time-off request wholesale.
///
/// # Errors
///
/// Returns an error if the request or officer does not exist, a date is
/// invalid, or the range is inverted.
pub fn update_time_off(
    state: &RosterState,
    time_off_id: i64,
    request: &SaveTimeOffRequest,
) -> Result<TransitionResult, ApiError> {
    let replacement: TimeOffRequest = TimeOffRequest::new(
        TimeOffId::new(time_off_id),
        OfficerId::new(request.officer_id),
        parse_date_field(&request.start)?,
        parse_date_field(&request.end)?,
        request.reason.clone(),
    );

    apply(state, Command::UpdateTimeOff { request: replacement }).map_err(translate_core_error)
}

/// Permanently removes a time-off request.
///
/// # Errors
///
/// Returns an error if the request does not exist.
pub fn delete_time_off(
    state: &RosterState,
    time_off_id: i64,
) -> Result<TransitionResult, ApiError> {
    apply(
        state,
        Command::DeleteTimeOff {
            time_off_id: TimeOffId::new(time_off_id),
        },
    )
    .map_err(translate_core_error)
}

/// Computes the rotation recommendation for a target date.
///
/// A date with no eligible officer is an informational outcome: the advice
/// carries the explanatory message and no candidates.
///
/// # Errors
///
/// Returns an error if the date is missing or does not parse.
pub fn recommend_rotation(
    state: &RosterState,
    request: &RecommendRotationRequest,
) -> Result<RotationAdvice, ApiError> {
    let raw_date: &str = request.target_date.trim();
    if raw_date.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("target_date"),
            message: String::from("Please provide a transport date."),
        });
    }

    let target_date = parse_date_field(raw_date)?;
    let weekday: Weekday = Weekday::of_date(target_date);

    recommend(target_date, &state.officers, &state.time_off).map_or_else(
        || {
            Ok(RotationAdvice {
                title: String::from("No Officers Found"),
                message: format!("No available officers found for {raw_date} ({weekday})."),
                primary: None,
                secondary: None,
            })
        },
        |recommendation| {
            let primary: RotationCandidateView = candidate_view(&recommendation.primary);
            let secondary: Option<RotationCandidateView> =
                recommendation.secondary.as_ref().map(candidate_view);

            let mut message: String = format!(
                "Primary: {} (Last Transport: {})",
                primary.name,
                last_transport_label(&primary)
            );
            if let Some(second) = &secondary {
                message.push_str(&format!(
                    "\nSecondary: {} (Last Transport: {})",
                    second.name,
                    last_transport_label(second)
                ));
            }

            Ok(RotationAdvice {
                title: String::from("Next Officers in Rotation"),
                message,
                primary: Some(primary),
                secondary,
            })
        },
    )
}

/// Bulk-imports officers from CSV content.
///
/// Atomic: a malformed file or row adds nothing.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or any row is invalid.
pub fn import_officers_csv(
    state: &RosterState,
    csv_content: &str,
) -> Result<TransitionResult, ApiError> {
    let rows = parse_officer_rows(csv_content)?;
    apply(state, Command::ImportOfficers { rows }).map_err(translate_core_error)
}

/// Bulk-imports transport jobs from CSV content.
///
/// Atomic: a malformed file or row adds nothing.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or any row is invalid.
pub fn import_transports_csv(
    state: &RosterState,
    csv_content: &str,
) -> Result<TransitionResult, ApiError> {
    let rows = parse_transport_rows(csv_content)?;
    apply(state, Command::ImportTransports { rows }).map_err(translate_core_error)
}

/// Serializes the transport report for download.
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn export_transports_report(state: &RosterState) -> Result<ExportResult, ApiError> {
    export_transports(&state.schedule)
}

/// Builds the view of a rotation candidate.
fn candidate_view(candidate: &RotationCandidate) -> RotationCandidateView {
    RotationCandidateView {
        officer_id: candidate.officer_id.value(),
        name: candidate.name.clone(),
        last_transport: candidate.last_transport.map(format_iso_date),
    }
}

/// Formats a candidate's last-transport date for the summary message.
fn last_transport_label(candidate: &RotationCandidateView) -> String {
    candidate
        .last_transport
        .clone()
        .unwrap_or_else(|| String::from("N/A"))
}
