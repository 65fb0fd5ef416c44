// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for transport status transitions and the statistics boundary.

use super::helpers::{apply_ok, officer_by_name, schedule_transport, state_with_officers};
use crate::{Command, RosterState};
use escort_roster_domain::TransportStatus;
use time::macros::date;

fn change_status(state: &RosterState, new_status: TransportStatus) -> RosterState {
    let transport_id = state.schedule[0].transport_id;
    apply_ok(
        state,
        Command::ChangeTransportStatus {
            transport_id,
            new_status,
        },
    )
    .new_state
}

#[test]
fn test_completion_credits_every_assigned_officer() {
    let state = state_with_officers(&["John Smith", "Jane Doe", "Mike Johnson"]);
    let state = schedule_transport(
        &state,
        date!(2024 - 03 - 01),
        &["John Smith", "Jane Doe"],
    )
    .new_state;

    let state = change_status(&state, TransportStatus::Completed);

    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 1);
    assert_eq!(
        officer_by_name(&state, "John Smith").last_transport,
        Some(date!(2024 - 03 - 01))
    );
    assert_eq!(officer_by_name(&state, "Jane Doe").total_transports, 1);
    assert_eq!(officer_by_name(&state, "Mike Johnson").total_transports, 0);
}

#[test]
fn test_revert_restores_counts_but_not_dates() {
    let state = state_with_officers(&["John Smith"]);
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;

    let state = change_status(&state, TransportStatus::Completed);
    let state = change_status(&state, TransportStatus::Scheduled);

    let officer = officer_by_name(&state, "John Smith");
    assert_eq!(officer.total_transports, 0);
    // The last-transport advance survives the revert.
    assert_eq!(officer.last_transport, Some(date!(2024 - 03 - 01)));
}

#[test]
fn test_scheduled_canceled_edges_never_touch_stats() {
    let state = state_with_officers(&["John Smith"]);
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;

    let state = change_status(&state, TransportStatus::Canceled);
    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 0);

    let state = change_status(&state, TransportStatus::Scheduled);
    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 0);
    assert!(officer_by_name(&state, "John Smith").last_transport.is_none());
}

#[test]
fn test_canceled_to_completed_crosses_the_boundary() {
    let state = state_with_officers(&["John Smith"]);
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;

    let state = change_status(&state, TransportStatus::Canceled);
    let state = change_status(&state, TransportStatus::Completed);

    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 1);
}

#[test]
fn test_repeated_completion_cycles_accumulate_once_per_edge() {
    let state = state_with_officers(&["John Smith"]);
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;

    let state = change_status(&state, TransportStatus::Completed);
    let state = change_status(&state, TransportStatus::Scheduled);
    let state = change_status(&state, TransportStatus::Completed);

    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 1);
}

#[test]
fn test_edit_crossing_boundary_reconciles() {
    let state = state_with_officers(&["John Smith"]);
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;

    // Edit the job wholesale, flipping its status to Completed.
    let mut job = state.schedule[0].clone();
    job.status = TransportStatus::Completed;
    let state = apply_ok(&state, Command::UpdateTransport { job }).new_state;

    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 1);
}

#[test]
fn test_edit_reverting_boundary_debits_previously_credited_officers() {
    let state = state_with_officers(&["John Smith", "Jane Doe"]);
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;
    let state = change_status(&state, TransportStatus::Completed);

    // The edit reassigns the job to Jane AND reverts it to Scheduled. The
    // debit applies to the stored assignment (John), who was credited.
    let mut job = state.schedule[0].clone();
    job.status = TransportStatus::Scheduled;
    job.officers = vec![String::from("Jane Doe")];
    let state = apply_ok(&state, Command::UpdateTransport { job }).new_state;

    assert_eq!(officer_by_name(&state, "John Smith").total_transports, 0);
    assert_eq!(officer_by_name(&state, "Jane Doe").total_transports, 0);
}

#[test]
fn test_completion_with_older_date_does_not_regress_last_transport() {
    let state = state_with_officers(&["John Smith"]);
    let state = schedule_transport(&state, date!(2024 - 05 - 01), &["John Smith"]).new_state;
    let state = schedule_transport(&state, date!(2024 - 03 - 01), &["John Smith"]).new_state;

    // Complete the newer transport first, then the older one.
    let newer_id = state.schedule[0].transport_id;
    let older_id = state.schedule[1].transport_id;
    let state = apply_ok(
        &state,
        Command::ChangeTransportStatus {
            transport_id: newer_id,
            new_status: TransportStatus::Completed,
        },
    )
    .new_state;
    let state = apply_ok(
        &state,
        Command::ChangeTransportStatus {
            transport_id: older_id,
            new_status: TransportStatus::Completed,
        },
    )
    .new_state;

    let officer = officer_by_name(&state, "John Smith");
    assert_eq!(officer.total_transports, 2);
    assert_eq!(officer.last_transport, Some(date!(2024 - 05 - 01)));
}
