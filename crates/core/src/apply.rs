// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Notice, RosterState, TransitionResult};
use escort_roster_domain::{
    Availability, DomainError, Officer, OfficerId, TimeOffId, TimeOffRequest, TransportId,
    TransportJob, reconcile_transport_stats, validate_job_fields, validate_officer_exists,
    validate_officer_fields, validate_time_off_range,
};

/// Finds the index of an officer in the roster.
fn officer_index(state: &RosterState, officer_id: OfficerId) -> Result<usize, CoreError> {
    state
        .officers
        .iter()
        .position(|officer| officer.officer_id == officer_id)
        .ok_or(CoreError::DomainViolation(DomainError::OfficerNotFound {
            officer_id: officer_id.value(),
        }))
}

/// Finds the index of a transport job in the schedule.
fn transport_index(state: &RosterState, transport_id: TransportId) -> Result<usize, CoreError> {
    state
        .schedule
        .iter()
        .position(|job| job.transport_id == transport_id)
        .ok_or(CoreError::DomainViolation(DomainError::TransportNotFound {
            transport_id: transport_id.value(),
        }))
}

/// Finds the index of a time-off request.
fn time_off_index(state: &RosterState, time_off_id: TimeOffId) -> Result<usize, CoreError> {
    state
        .time_off
        .iter()
        .position(|request| request.time_off_id == time_off_id)
        .ok_or(CoreError::DomainViolation(DomainError::TimeOffNotFound {
            time_off_id: time_off_id.value(),
        }))
}

/// Applies a command to the current state, producing a new state and notice.
///
/// This is the only mutation path in the system. The function is a pure
/// reducer: the input state is never modified, and a returned error means no
/// state change happened at all.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the user-facing
///   notice for the operation
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules
/// - The command references an officer, transport, or time-off request that
///   does not exist
#[allow(clippy::too_many_lines)]
pub fn apply(state: &RosterState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AddOfficer {
            name,
            badge,
            contact,
            availability,
        } => {
            let officer: Officer =
                Officer::new(state.next_officer_id(), name, badge, contact, availability);
            validate_officer_fields(&officer)?;

            let mut new_state: RosterState = state.clone();
            new_state.officers.push(officer);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("New officer added to roster.")),
            })
        }
        Command::UpdateOfficer { officer } => {
            let index: usize = officer_index(state, officer.officer_id)?;
            validate_officer_fields(&officer)?;

            let mut new_state: RosterState = state.clone();
            new_state.officers[index] = officer;

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Officer details updated.")),
            })
        }
        Command::DeleteOfficer { officer_id } => {
            let _: usize = officer_index(state, officer_id)?;

            // Time-off rows referencing the officer stay in place; with no
            // matching roster entry they are inert for rotation purposes.
            let mut new_state: RosterState = state.clone();
            new_state
                .officers
                .retain(|officer| officer.officer_id != officer_id);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Item deleted successfully.")),
            })
        }
        Command::ScheduleTransport {
            date,
            prisoner_name,
            prisoner_id,
            pickup,
            destination,
            officers,
            notes,
            scheduled_pickup_time,
        } => {
            let assigned: Vec<String> = officers
                .into_iter()
                .filter(|name| !name.trim().is_empty())
                .collect();
            let job: TransportJob = TransportJob::new(
                state.next_transport_id(),
                date,
                prisoner_name,
                prisoner_id,
                pickup,
                destination,
                assigned,
                notes,
                scheduled_pickup_time,
            );
            validate_job_fields(&job)?;

            let mut new_state: RosterState = state.clone();
            new_state.schedule.push(job);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("New transport scheduled.")),
            })
        }
        Command::UpdateTransport { job } => {
            let index: usize = transport_index(state, job.transport_id)?;
            validate_job_fields(&job)?;

            let mut replacement: TransportJob = job;
            replacement
                .officers
                .retain(|name| !name.trim().is_empty());

            let mut new_state: RosterState = state.clone();
            let stored: TransportJob = new_state.schedule[index].clone();

            // An edit that moves the job across the Completed boundary
            // reconciles statistics exactly like an explicit status change.
            // Completing credits the officers on the replacement; reverting
            // debits the officers that were credited on the stored job.
            match stored.status.crosses_completed_boundary(replacement.status) {
                Some(true) => {
                    new_state.officers =
                        reconcile_transport_stats(&replacement, &new_state.officers, true);
                }
                Some(false) => {
                    new_state.officers =
                        reconcile_transport_stats(&stored, &new_state.officers, false);
                }
                None => {}
            }

            new_state.schedule[index] = replacement;

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Transport updated successfully.")),
            })
        }
        Command::ChangeTransportStatus {
            transport_id,
            new_status,
        } => {
            let index: usize = transport_index(state, transport_id)?;

            let mut new_state: RosterState = state.clone();
            let job: TransportJob = new_state.schedule[index].clone();

            if let Some(completing) = job.status.crosses_completed_boundary(new_status) {
                new_state.officers =
                    reconcile_transport_stats(&job, &new_state.officers, completing);
            }
            new_state.schedule[index].status = new_status;

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(format!("Transport marked {new_status}.")),
            })
        }
        Command::DeleteTransport { transport_id } => {
            let _: usize = transport_index(state, transport_id)?;

            // Deletion is permanent and never reverses statistics applied on
            // a prior completion.
            let mut new_state: RosterState = state.clone();
            new_state
                .schedule
                .retain(|job| job.transport_id != transport_id);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Item deleted successfully.")),
            })
        }
        Command::AddTimeOff {
            officer_id,
            start,
            end,
            reason,
        } => {
            validate_officer_exists(officer_id, &state.officers)?;

            let request: TimeOffRequest =
                TimeOffRequest::new(state.next_time_off_id(), officer_id, start, end, reason);
            validate_time_off_range(&request)?;

            let mut new_state: RosterState = state.clone();
            new_state.time_off.push(request);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Time off request added.")),
            })
        }
        Command::UpdateTimeOff { request } => {
            let index: usize = time_off_index(state, request.time_off_id)?;
            validate_officer_exists(request.officer_id, &state.officers)?;
            validate_time_off_range(&request)?;

            let mut new_state: RosterState = state.clone();
            new_state.time_off[index] = request;

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Time off request updated.")),
            })
        }
        Command::DeleteTimeOff { time_off_id } => {
            let _: usize = time_off_index(state, time_off_id)?;

            let mut new_state: RosterState = state.clone();
            new_state
                .time_off
                .retain(|request| request.time_off_id != time_off_id);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(String::from("Item deleted successfully.")),
            })
        }
        Command::ImportOfficers { rows } => {
            // Validate every row before touching the roster so a bad row
            // aborts the whole import.
            let mut next_id: i64 = state.next_officer_id().value();
            let mut imported: Vec<Officer> = Vec::with_capacity(rows.len());
            for row in rows {
                let officer: Officer = Officer::new(
                    OfficerId::new(next_id),
                    row.name,
                    row.badge,
                    row.contact,
                    Availability::import_default(),
                );
                validate_officer_fields(&officer)?;
                next_id += 1;
                imported.push(officer);
            }

            let count: usize = imported.len();
            let mut new_state: RosterState = state.clone();
            new_state.officers.extend(imported);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(format!("{count} officers imported!")),
            })
        }
        Command::ImportTransports { rows } => {
            let mut next_id: i64 = state.next_transport_id().value();
            let mut imported: Vec<TransportJob> = Vec::with_capacity(rows.len());
            for row in rows {
                let job: TransportJob = TransportJob::new(
                    TransportId::new(next_id),
                    row.date,
                    row.prisoner_name,
                    row.prisoner_id,
                    row.pickup,
                    row.destination,
                    Vec::new(),
                    row.notes,
                    row.scheduled_pickup_time,
                );
                validate_job_fields(&job)?;
                next_id += 1;
                imported.push(job);
            }

            let count: usize = imported.len();
            let mut new_state: RosterState = state.clone();
            new_state.schedule.extend(imported);

            Ok(TransitionResult {
                new_state,
                notice: Notice::success(format!("{count} transports imported!")),
            })
        }
    }
}
