// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, RosterState, TransitionResult, apply};
use escort_roster_domain::{Availability, ClockTime, Officer, TransportJob};
use time::Date;

/// Applies a command, panicking on failure.
#[allow(clippy::expect_used)]
pub fn apply_ok(state: &RosterState, command: Command) -> TransitionResult {
    apply(state, command).expect("command should apply")
}

/// Builds a state with the given officers added through the reducer.
pub fn state_with_officers(names: &[&str]) -> RosterState {
    let mut state: RosterState = RosterState::new();
    for name in names {
        let result = apply_ok(
            &state,
            Command::AddOfficer {
                name: (*name).to_string(),
                badge: format!("B-{name}"),
                contact: String::from("(555) 000-0000"),
                availability: Availability::default(),
            },
        );
        state = result.new_state;
    }
    state
}

/// Schedules a transport assigned to the given officer names.
pub fn schedule_transport(
    state: &RosterState,
    date: Date,
    officers: &[&str],
) -> TransitionResult {
    apply_ok(
        state,
        Command::ScheduleTransport {
            date,
            prisoner_name: String::from("Test Prisoner"),
            prisoner_id: String::from("P-001"),
            pickup: String::from("County Jail"),
            destination: String::from("State Unit"),
            officers: officers.iter().map(ToString::to_string).collect(),
            notes: String::new(),
            scheduled_pickup_time: ClockTime::parse("08:00").ok(),
        },
    )
}

/// Returns the officer with the given name, panicking if absent.
#[allow(clippy::expect_used)]
pub fn officer_by_name<'a>(state: &'a RosterState, name: &str) -> &'a Officer {
    state
        .officers
        .iter()
        .find(|officer| officer.name == name)
        .expect("officer should exist")
}
