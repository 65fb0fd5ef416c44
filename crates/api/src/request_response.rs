// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These types carry strings, not domain types: all parsing and validation
//! happens in the API layer, and domain types never leak raw to callers.

use crate::error::{ApiError, translate_domain_error};
use escort_roster::RosterState;
use escort_roster_domain::{
    Availability, AvailabilityStatus, ClockTime, Officer, TimeOffRequest, TransportJob,
    format_iso_date,
};
use std::str::FromStr;

/// Formats an optional clock time as the wire value (empty when unset).
#[must_use]
pub fn clock_or_empty(value: Option<ClockTime>) -> String {
    value.map_or_else(String::new, |clock| clock.to_string())
}

/// Weekly availability as one status string per weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityForm {
    /// Monday's status.
    pub monday: String,
    /// Tuesday's status.
    pub tuesday: String,
    /// Wednesday's status.
    pub wednesday: String,
    /// Thursday's status.
    pub thursday: String,
    /// Friday's status.
    pub friday: String,
    /// Saturday's status.
    pub saturday: String,
    /// Sunday's status.
    pub sunday: String,
}

impl AvailabilityForm {
    /// Parses the form into a domain availability pattern.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming the offending weekday if any
    /// status string is not part of the fixed vocabulary.
    pub fn parse(&self) -> Result<Availability, ApiError> {
        let parse_day = |day: &str, value: &str| -> Result<AvailabilityStatus, ApiError> {
            AvailabilityStatus::from_str(value).map_err(|_| ApiError::InvalidInput {
                field: format!("availability.{day}"),
                message: format!(
                    "Invalid availability status: '{value}'. Must be Available, Off, Training, or Sick"
                ),
            })
        };

        Ok(Availability {
            monday: parse_day("monday", &self.monday)?,
            tuesday: parse_day("tuesday", &self.tuesday)?,
            wednesday: parse_day("wednesday", &self.wednesday)?,
            thursday: parse_day("thursday", &self.thursday)?,
            friday: parse_day("friday", &self.friday)?,
            saturday: parse_day("saturday", &self.saturday)?,
            sunday: parse_day("sunday", &self.sunday)?,
        })
    }

    /// Builds the form view of a domain availability pattern.
    #[must_use]
    pub fn from_domain(availability: &Availability) -> Self {
        Self {
            monday: availability.monday.to_string(),
            tuesday: availability.tuesday.to_string(),
            wednesday: availability.wednesday.to_string(),
            thursday: availability.thursday.to_string(),
            friday: availability.friday.to_string(),
            saturday: availability.saturday.to_string(),
            sunday: availability.sunday.to_string(),
        }
    }
}

/// API request to add or update an officer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOfficerRequest {
    /// The officer's display name.
    pub name: String,
    /// The officer's badge code.
    pub badge: String,
    /// The officer's contact string.
    pub contact: String,
    /// The officer's weekly availability.
    pub availability: AvailabilityForm,
}

/// API request to schedule or update a transport job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTransportRequest {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Prisoner display name.
    pub prisoner_name: String,
    /// Prisoner booking identifier.
    pub prisoner_id: String,
    /// Pickup location.
    pub pickup: String,
    /// Destination location.
    pub destination: String,
    /// Assigned officer display names. Empty entries are dropped.
    pub officers: Vec<String>,
    /// Lifecycle status. Ignored on creation (new jobs are Scheduled).
    pub status: String,
    /// Free-text notes.
    pub notes: String,
    /// Planned pickup time, "HH:MM" or empty.
    pub scheduled_pickup_time: String,
    /// Recorded pickup time, "HH:MM" or empty.
    pub actual_pickup_time: String,
    /// Recorded dropoff time, "HH:MM" or empty.
    pub actual_dropoff_time: String,
}

/// API request to move a transport job to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    /// The status to move to.
    pub status: String,
}

/// API request to add or update a time-off request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTimeOffRequest {
    /// The officer the request belongs to.
    pub officer_id: i64,
    /// Inclusive start date, `YYYY-MM-DD`.
    pub start: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub end: String,
    /// Free-text reason.
    pub reason: String,
}

/// API request for a rotation recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendRotationRequest {
    /// The transport date to staff, `YYYY-MM-DD`.
    pub target_date: String,
}

/// Officer view returned by list and write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerView {
    /// The officer's identifier.
    pub officer_id: i64,
    /// The officer's display name.
    pub name: String,
    /// The officer's badge code.
    pub badge: String,
    /// The officer's contact string.
    pub contact: String,
    /// Last-transport date, `YYYY-MM-DD`, absent when never transported.
    pub last_transport: Option<String>,
    /// Cumulative completed-transport count.
    pub total_transports: u32,
    /// Weekly availability.
    pub availability: AvailabilityForm,
}

impl OfficerView {
    /// Builds the view of a roster officer.
    #[must_use]
    pub fn from_domain(officer: &Officer) -> Self {
        Self {
            officer_id: officer.officer_id.value(),
            name: officer.name.clone(),
            badge: officer.badge.clone(),
            contact: officer.contact.clone(),
            last_transport: officer.last_transport.map(format_iso_date),
            total_transports: officer.total_transports,
            availability: AvailabilityForm::from_domain(&officer.availability),
        }
    }
}

/// Transport view returned by list and write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportView {
    /// The transport's identifier.
    pub transport_id: i64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Prisoner display name.
    pub prisoner_name: String,
    /// Prisoner booking identifier.
    pub prisoner_id: String,
    /// Pickup location.
    pub pickup: String,
    /// Destination location.
    pub destination: String,
    /// Assigned officer display names.
    pub officers: Vec<String>,
    /// Lifecycle status.
    pub status: String,
    /// Free-text notes.
    pub notes: String,
    /// Planned pickup time, "HH:MM" or empty.
    pub scheduled_pickup_time: String,
    /// Recorded pickup time, "HH:MM" or empty.
    pub actual_pickup_time: String,
    /// Recorded dropoff time, "HH:MM" or empty.
    pub actual_dropoff_time: String,
}

impl TransportView {
    /// Builds the view of a transport job.
    #[must_use]
    pub fn from_domain(job: &TransportJob) -> Self {
        Self {
            transport_id: job.transport_id.value(),
            date: format_iso_date(job.date),
            prisoner_name: job.prisoner_name.clone(),
            prisoner_id: job.prisoner_id.clone(),
            pickup: job.pickup.clone(),
            destination: job.destination.clone(),
            officers: job.officers.clone(),
            status: job.status.to_string(),
            notes: job.notes.clone(),
            scheduled_pickup_time: clock_or_empty(job.scheduled_pickup_time),
            actual_pickup_time: clock_or_empty(job.actual_pickup_time),
            actual_dropoff_time: clock_or_empty(job.actual_dropoff_time),
        }
    }
}

/// Time-off view returned by list and write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOffView {
    /// The request's identifier.
    pub time_off_id: i64,
    /// The officer the request belongs to.
    pub officer_id: i64,
    /// The officer's display name, when still on the roster.
    pub officer_name: Option<String>,
    /// Inclusive start date, `YYYY-MM-DD`.
    pub start: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub end: String,
    /// Free-text reason.
    pub reason: String,
}

impl TimeOffView {
    /// Builds the view of a time-off request, resolving the officer name
    /// against the roster.
    #[must_use]
    pub fn from_domain(request: &TimeOffRequest, state: &RosterState) -> Self {
        let officer_name: Option<String> = state
            .officers
            .iter()
            .find(|officer| officer.officer_id == request.officer_id)
            .map(|officer| officer.name.clone());

        Self {
            time_off_id: request.time_off_id.value(),
            officer_id: request.officer_id.value(),
            officer_name,
            start: format_iso_date(request.start),
            end: format_iso_date(request.end),
            reason: request.reason.clone(),
        }
    }
}

/// One officer put forward by a rotation recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationCandidateView {
    /// The officer's identifier.
    pub officer_id: i64,
    /// The officer's display name.
    pub name: String,
    /// Last-transport date, `YYYY-MM-DD`, absent when never transported.
    pub last_transport: Option<String>,
}

/// The outcome of a rotation recommendation request.
///
/// A date with no eligible officer is an informational outcome, not an
/// error: `primary` is absent and the message explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationAdvice {
    /// Short heading for the presentation layer.
    pub title: String,
    /// Human-readable summary of the recommendation.
    pub message: String,
    /// First officer in the rotation, if any is eligible.
    pub primary: Option<RotationCandidateView>,
    /// Second officer in the rotation, if a second is eligible.
    pub secondary: Option<RotationCandidateView>,
}

/// Parses a `YYYY-MM-DD` request field into a domain date.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the string does not parse.
pub fn parse_date_field(value: &str) -> Result<time::Date, ApiError> {
    escort_roster_domain::parse_iso_date(value).map_err(translate_domain_error)
}

/// Parses an optional "HH:MM" request field.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the string is non-empty and invalid.
pub fn parse_clock_field(value: &str) -> Result<Option<ClockTime>, ApiError> {
    ClockTime::parse_optional(value).map_err(translate_domain_error)
}
