// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The seven weekday names used to key an officer's weekly availability.
///
/// Derived from a calendar date via [`Weekday::of_date`], which uses the
/// date-only representation so the same calendar date always yields the same
/// weekday regardless of the caller's local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday through Sunday.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Converts this weekday to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Returns the weekday of a calendar date.
    #[must_use]
    pub const fn of_date(date: Date) -> Self {
        match date.weekday() {
            time::Weekday::Monday => Self::Monday,
            time::Weekday::Tuesday => Self::Tuesday,
            time::Weekday::Wednesday => Self::Wednesday,
            time::Weekday::Thursday => Self::Thursday,
            time::Weekday::Friday => Self::Friday,
            time::Weekday::Saturday => Self::Saturday,
            time::Weekday::Sunday => Self::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidWeekday(s.to_string())),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An officer's standing availability for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AvailabilityStatus {
    /// Eligible for transport assignment on this weekday.
    #[default]
    Available,
    /// Regular day off.
    Off,
    /// Scheduled training; not assignable.
    Training,
    /// On sick leave; not assignable.
    Sick,
}

impl AvailabilityStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Off => "Off",
            Self::Training => "Training",
            Self::Sick => "Sick",
        }
    }

    /// Returns whether this status permits transport assignment.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    // Matching is case-insensitive: stored rosters carried mixed-case values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "off" => Ok(Self::Off),
            "training" => Ok(Self::Training),
            "sick" => Ok(Self::Sick),
            _ => Err(DomainError::InvalidAvailabilityStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a transport job.
///
/// The transition graph is fully connected; there is no terminal state.
/// Officer statistics are reconciled only on transitions that cross the
/// `Completed` boundary (see [`crate::reconcile_transport_stats`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransportStatus {
    /// Initial state after creation.
    #[default]
    Scheduled,
    /// Transport carried out; counted in officer statistics.
    Completed,
    /// Transport called off; not counted.
    Canceled,
}

impl TransportStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }

    /// Reports whether a transition from this status to `target` crosses the
    /// `Completed` boundary.
    ///
    /// Returns `Some(true)` when entering `Completed`, `Some(false)` when
    /// leaving it, and `None` for every other edge (including self-loops and
    /// `Scheduled` ↔ `Canceled`).
    #[must_use]
    pub const fn crosses_completed_boundary(self, target: Self) -> Option<bool> {
        match (self, target) {
            (Self::Scheduled | Self::Canceled, Self::Completed) => Some(true),
            (Self::Completed, Self::Scheduled | Self::Canceled) => Some(false),
            _ => None,
        }
    }
}

impl FromStr for TransportStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Completed" => Ok(Self::Completed),
            "Canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidTransportStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque identifier for an officer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OfficerId(i64);

impl OfficerId {
    /// Creates a new `OfficerId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OfficerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a transport job.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TransportId(i64);

impl TransportId {
    /// Creates a new `TransportId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a time-off request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeOffId(i64);

impl TimeOffId {
    /// Creates a new `TimeOffId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TimeOffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated "HH:MM" wall-clock value.
///
/// Transport pickup/dropoff fields that may be unset are modeled as
/// `Option<ClockTime>`; see [`ClockTime::parse_optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a `ClockTime` from hour and minute values.
    ///
    /// Returns `None` if either value is out of range.
    #[must_use]
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Parses a `ClockTime` from an "HH:MM" string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not two zero-padded digit pairs
    /// separated by a colon, or if the hour/minute is out of range.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidClockTime(s.to_string());

        let (hour_str, minute_str) = s.split_once(':').ok_or_else(invalid)?;
        if hour_str.len() != 2 || minute_str.len() != 2 {
            return Err(invalid());
        }

        let hour: u8 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_str.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self { hour, minute })
    }

    /// Parses an optional `ClockTime`, treating an empty or blank string as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is non-empty but not a valid "HH:MM"
    /// value.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Self::parse(trimmed).map(Some)
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// An officer's weekly availability pattern.
///
/// Every weekday has exactly one status; the invariant is held by
/// construction since there is one field per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub monday: AvailabilityStatus,
    pub tuesday: AvailabilityStatus,
    pub wednesday: AvailabilityStatus,
    pub thursday: AvailabilityStatus,
    pub friday: AvailabilityStatus,
    pub saturday: AvailabilityStatus,
    pub sunday: AvailabilityStatus,
}

impl Availability {
    /// Creates an availability pattern with the same status on every weekday.
    #[must_use]
    pub const fn uniform(status: AvailabilityStatus) -> Self {
        Self {
            monday: status,
            tuesday: status,
            wednesday: status,
            thursday: status,
            friday: status,
            saturday: status,
            sunday: status,
        }
    }

    /// Creates the bulk-import default pattern: Monday through Friday
    /// available, weekend off.
    #[must_use]
    pub const fn import_default() -> Self {
        Self {
            monday: AvailabilityStatus::Available,
            tuesday: AvailabilityStatus::Available,
            wednesday: AvailabilityStatus::Available,
            thursday: AvailabilityStatus::Available,
            friday: AvailabilityStatus::Available,
            saturday: AvailabilityStatus::Off,
            sunday: AvailabilityStatus::Off,
        }
    }

    /// Returns the status for the given weekday.
    #[must_use]
    pub const fn status_for(&self, weekday: Weekday) -> AvailabilityStatus {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::uniform(AvailabilityStatus::Available)
    }
}

/// A staff member eligible for transport assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    /// Opaque identifier, unique within the roster.
    pub officer_id: OfficerId,
    /// Display name; transport jobs reference officers by this name.
    pub name: String,
    /// Badge code.
    pub badge: String,
    /// Free-form contact string.
    pub contact: String,
    /// Date of the most recent completed transport. `None` means the officer
    /// has never been assigned a completed transport.
    pub last_transport: Option<Date>,
    /// Cumulative completed-transport count.
    pub total_transports: u32,
    /// Weekly availability pattern.
    pub availability: Availability,
}

impl Officer {
    /// Creates a new `Officer` with zeroed transport statistics.
    #[must_use]
    pub const fn new(
        officer_id: OfficerId,
        name: String,
        badge: String,
        contact: String,
        availability: Availability,
    ) -> Self {
        Self {
            officer_id,
            name,
            badge,
            contact,
            last_transport: None,
            total_transports: 0,
            availability,
        }
    }
}

/// A date range during which an officer is unavailable regardless of their
/// weekly pattern.
///
/// Multiple requests per officer are allowed and may overlap; no merging is
/// performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Opaque identifier.
    pub time_off_id: TimeOffId,
    /// The officer this request belongs to.
    pub officer_id: OfficerId,
    /// Inclusive start date.
    pub start: Date,
    /// Inclusive end date. Must not be earlier than `start`.
    pub end: Date,
    /// Free-text reason.
    pub reason: String,
}

impl TimeOffRequest {
    /// Creates a new `TimeOffRequest`.
    #[must_use]
    pub const fn new(
        time_off_id: TimeOffId,
        officer_id: OfficerId,
        start: Date,
        end: Date,
        reason: String,
    ) -> Self {
        Self {
            time_off_id,
            officer_id,
            start,
            end,
            reason,
        }
    }

    /// Returns whether the inclusive range `[start, end]` contains `date`.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One scheduled prisoner movement with route, timing, and assigned officers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportJob {
    /// Opaque identifier.
    pub transport_id: TransportId,
    /// Calendar date of the transport.
    pub date: Date,
    /// Prisoner display name.
    pub prisoner_name: String,
    /// Prisoner booking identifier.
    pub prisoner_id: String,
    /// Pickup location.
    pub pickup: String,
    /// Destination location.
    pub destination: String,
    /// Assigned officer display names (0..N). Duplicates are preserved.
    pub officers: Vec<String>,
    /// Lifecycle status.
    pub status: TransportStatus,
    /// Free-text notes.
    pub notes: String,
    /// Planned pickup time, if set.
    pub scheduled_pickup_time: Option<ClockTime>,
    /// Recorded pickup time, if set.
    pub actual_pickup_time: Option<ClockTime>,
    /// Recorded dropoff time, if set.
    pub actual_dropoff_time: Option<ClockTime>,
}

impl TransportJob {
    /// Creates a new `TransportJob` in the `Scheduled` state with unset
    /// actual times.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        transport_id: TransportId,
        date: Date,
        prisoner_name: String,
        prisoner_id: String,
        pickup: String,
        destination: String,
        officers: Vec<String>,
        notes: String,
        scheduled_pickup_time: Option<ClockTime>,
    ) -> Self {
        Self {
            transport_id,
            date,
            prisoner_name,
            prisoner_id,
            pickup,
            destination,
            officers,
            status: TransportStatus::Scheduled,
            notes,
            scheduled_pickup_time,
            actual_pickup_time: None,
            actual_dropoff_time: None,
        }
    }

    /// Returns whether the given officer name appears in the assignment list.
    #[must_use]
    pub fn assigns_officer(&self, name: &str) -> bool {
        self.officers.iter().any(|assigned| assigned == name)
    }
}
