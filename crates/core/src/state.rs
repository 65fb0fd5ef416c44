// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use escort_roster_domain::{Officer, OfficerId, TimeOffId, TimeOffRequest, TransportId, TransportJob};
use serde::{Deserialize, Serialize};

/// The complete application state: the three collections owned as one
/// exclusively-held snapshot.
///
/// All mutation goes through [`crate::apply`]; callers replace their snapshot
/// atomically with the returned state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterState {
    /// All registered officers.
    pub officers: Vec<Officer>,
    /// All transport jobs, scheduled and archived alike.
    pub schedule: Vec<TransportJob>,
    /// All time-off requests.
    pub time_off: Vec<TimeOffRequest>,
}

impl RosterState {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            officers: Vec::new(),
            schedule: Vec::new(),
            time_off: Vec::new(),
        }
    }

    /// Returns the next free officer identifier.
    ///
    /// Identifiers are assigned deterministically as `max existing + 1`.
    #[must_use]
    pub fn next_officer_id(&self) -> OfficerId {
        OfficerId::new(
            self.officers
                .iter()
                .map(|officer| officer.officer_id.value())
                .max()
                .unwrap_or(0)
                + 1,
        )
    }

    /// Returns the next free transport identifier.
    #[must_use]
    pub fn next_transport_id(&self) -> TransportId {
        TransportId::new(
            self.schedule
                .iter()
                .map(|job| job.transport_id.value())
                .max()
                .unwrap_or(0)
                + 1,
        )
    }

    /// Returns the next free time-off identifier.
    #[must_use]
    pub fn next_time_off_id(&self) -> TimeOffId {
        TimeOffId::new(
            self.time_off
                .iter()
                .map(|request| request.time_off_id.value())
                .max()
                .unwrap_or(0)
                + 1,
        )
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing outcome of a successful transition: a dismissable title and
/// message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short heading (e.g. "Success").
    pub title: String,
    /// Human-readable description of what happened.
    pub message: String,
}

impl Notice {
    /// Creates a new `Notice`.
    #[must_use]
    pub const fn new(title: String, message: String) -> Self {
        Self { title, message }
    }

    /// Creates a success notice with the standard title.
    #[must_use]
    pub fn success(message: String) -> Self {
        Self {
            title: String::from("Success"),
            message,
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: RosterState,
    /// The user-facing notice describing this transition.
    pub notice: Notice,
}
