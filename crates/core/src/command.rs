// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use escort_roster_domain::{
    Availability, ClockTime, Officer, OfficerId, TimeOffId, TimeOffRequest, TransportId,
    TransportJob, TransportStatus,
};
use time::Date;

/// A parsed officer row from a bulk roster import.
///
/// Imported officers receive the import-default availability pattern and
/// zeroed transport statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerImportRow {
    /// The officer's display name.
    pub name: String,
    /// The officer's badge code.
    pub badge: String,
    /// The officer's contact string.
    pub contact: String,
}

/// A parsed transport row from a bulk schedule import.
///
/// Imported jobs are created as `Scheduled` with no assigned officers and
/// unset actual times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportImportRow {
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
    /// Planned pickup time, if set.
    pub scheduled_pickup_time: Option<ClockTime>,
    /// Free-text notes.
    pub notes: String,
}

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new officer to the roster.
    AddOfficer {
        /// The officer's display name.
        name: String,
        /// The officer's badge code.
        badge: String,
        /// The officer's contact string.
        contact: String,
        /// The officer's weekly availability pattern.
        availability: Availability,
    },
    /// Replace an existing officer's record wholesale.
    UpdateOfficer {
        /// The replacement record; matched by `officer_id`.
        officer: Officer,
    },
    /// Permanently remove an officer from the roster.
    ///
    /// Time-off requests referencing the officer are left in place.
    DeleteOfficer {
        /// The officer to remove.
        officer_id: OfficerId,
    },
    /// Schedule a new transport job.
    ScheduleTransport {
        /// Calendar date of the transport.
        date: Date,
        /// Prisoner display name.
        prisoner_name: String,
        /// Prisoner booking identifier.
        prisoner_id: String,
        /// Pickup location.
        pickup: String,
        /// Destination location.
        destination: String,
        /// Assigned officer display names. Empty entries are filtered out.
        officers: Vec<String>,
        /// Free-text notes.
        notes: String,
        /// Planned pickup time, if set.
        scheduled_pickup_time: Option<ClockTime>,
    },
    /// Replace an existing transport job wholesale.
    ///
    /// If the replacement crosses the `Completed` boundary relative to the
    /// stored job, officer statistics are reconciled in the same transition.
    UpdateTransport {
        /// The replacement job; matched by `transport_id`.
        job: TransportJob,
    },
    /// Move a transport job to a new lifecycle status.
    ///
    /// Officer statistics are reconciled when (and only when) the edge
    /// crosses the `Completed` boundary.
    ChangeTransportStatus {
        /// The transport to update.
        transport_id: TransportId,
        /// The status to move to.
        new_status: TransportStatus,
    },
    /// Permanently remove a transport job.
    ///
    /// Statistics previously applied on completion are NOT reversed.
    DeleteTransport {
        /// The transport to remove.
        transport_id: TransportId,
    },
    /// Add a time-off request for an existing officer.
    AddTimeOff {
        /// The officer the request belongs to.
        officer_id: OfficerId,
        /// Inclusive start date.
        start: Date,
        /// Inclusive end date.
        end: Date,
        /// Free-text reason.
        reason: String,
    },
    /// Replace an existing time-off request wholesale.
    UpdateTimeOff {
        /// The replacement request; matched by `time_off_id`.
        request: TimeOffRequest,
    },
    /// Permanently remove a time-off request.
    DeleteTimeOff {
        /// The request to remove.
        time_off_id: TimeOffId,
    },
    /// Bulk-append officers from a validated import.
    ///
    /// Atomic: either every row is added or none is.
    ImportOfficers {
        /// The parsed rows.
        rows: Vec<OfficerImportRow>,
    },
    /// Bulk-append transport jobs from a validated import.
    ///
    /// Atomic: either every row is added or none is.
    ImportTransports {
        /// The parsed rows.
        rows: Vec<TransportImportRow>,
    },
}
