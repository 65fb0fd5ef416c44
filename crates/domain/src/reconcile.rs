// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Officer statistics reconciliation at the `Completed` boundary.
//!
//! When a transport job transitions into `Completed`, every assigned
//! officer's cumulative count goes up and their last-transport date advances
//! (never backward). When a job transitions out of `Completed`, the count
//! goes back down, floored at zero.
//!
//! ## Invariants
//!
//! - `total_transports` never goes negative
//! - `last_transport` never moves backward
//! - Officers not named on the job are returned unchanged
//! - Unknown names on the job match no officer and are silently ignored
//!
//! Reverting deliberately leaves `last_transport` untouched: the roster does
//! not carry per-officer transport history, so the prior value cannot be
//! reconstructed.

use crate::types::{Officer, TransportJob};

/// Adjusts officer statistics for a job crossing the `Completed` boundary.
///
/// # Arguments
///
/// * `job` - The transport whose status is changing
/// * `officers` - The current roster
/// * `completing` - `true` when the job is moving into `Completed`, `false`
///   when it is moving out
///
/// # Returns
///
/// A full replacement roster. The caller is responsible for persisting it.
/// Must be invoked exactly once per transition crossing into or out of
/// `Completed`, and never for `Scheduled` ↔ `Canceled` transitions.
#[must_use]
pub fn reconcile_transport_stats(
    job: &TransportJob,
    officers: &[Officer],
    completing: bool,
) -> Vec<Officer> {
    officers
        .iter()
        .map(|officer| {
            if !job.assigns_officer(&officer.name) {
                return officer.clone();
            }

            let mut updated: Officer = officer.clone();
            if completing {
                updated.total_transports += 1;
                if updated.last_transport.is_none_or(|last| job.date > last) {
                    updated.last_transport = Some(job.date);
                }
            } else {
                updated.total_transports = updated.total_transports.saturating_sub(1);
                // last_transport stays as-is; prior history is not tracked.
            }
            updated
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Availability, Officer, OfficerId, TransportId, TransportJob, TransportStatus,
    };
    use time::Date;
    use time::macros::date;

    fn create_test_officer(
        officer_id: i64,
        name: &str,
        last_transport: Option<Date>,
        total_transports: u32,
    ) -> Officer {
        Officer {
            officer_id: OfficerId::new(officer_id),
            name: name.to_string(),
            badge: format!("B{officer_id}"),
            contact: String::from("(555) 000-0000"),
            last_transport,
            total_transports,
            availability: Availability::default(),
        }
    }

    fn create_test_job(date: Date, officers: &[&str]) -> TransportJob {
        TransportJob {
            transport_id: TransportId::new(1),
            date,
            prisoner_name: String::from("Test Prisoner"),
            prisoner_id: String::from("P-001"),
            pickup: String::from("County Jail"),
            destination: String::from("State Unit"),
            officers: officers.iter().map(ToString::to_string).collect(),
            status: TransportStatus::Scheduled,
            notes: String::new(),
            scheduled_pickup_time: None,
            actual_pickup_time: None,
            actual_dropoff_time: None,
        }
    }

    #[test]
    fn test_completion_updates_all_named_officers() {
        let officers = vec![
            create_test_officer(1, "A", Some(date!(2024 - 01 - 01)), 2),
            create_test_officer(2, "B", Some(date!(2024 - 02 - 01)), 4),
            create_test_officer(3, "C", None, 0),
        ];
        let job = create_test_job(date!(2024 - 03 - 01), &["A", "B"]);

        let updated = reconcile_transport_stats(&job, &officers, true);

        assert_eq!(updated[0].total_transports, 3);
        assert_eq!(updated[0].last_transport, Some(date!(2024 - 03 - 01)));
        assert_eq!(updated[1].total_transports, 5);
        assert_eq!(updated[1].last_transport, Some(date!(2024 - 03 - 01)));
        // C is not named on the job.
        assert_eq!(updated[2], officers[2]);
    }

    #[test]
    fn test_completion_does_not_move_last_transport_backward() {
        let officers = vec![create_test_officer(1, "A", Some(date!(2024 - 05 - 01)), 1)];
        let job = create_test_job(date!(2024 - 03 - 01), &["A"]);

        let updated = reconcile_transport_stats(&job, &officers, true);

        assert_eq!(updated[0].total_transports, 2);
        assert_eq!(updated[0].last_transport, Some(date!(2024 - 05 - 01)));
    }

    #[test]
    fn test_completion_sets_date_for_never_transported() {
        let officers = vec![create_test_officer(1, "A", None, 0)];
        let job = create_test_job(date!(2024 - 03 - 01), &["A"]);

        let updated = reconcile_transport_stats(&job, &officers, true);

        assert_eq!(updated[0].last_transport, Some(date!(2024 - 03 - 01)));
    }

    #[test]
    fn test_revert_decrements_and_keeps_last_transport() {
        let officers = vec![create_test_officer(1, "A", Some(date!(2024 - 03 - 01)), 3)];
        let job = create_test_job(date!(2024 - 03 - 01), &["A"]);

        let updated = reconcile_transport_stats(&job, &officers, false);

        assert_eq!(updated[0].total_transports, 2);
        assert_eq!(updated[0].last_transport, Some(date!(2024 - 03 - 01)));
    }

    #[test]
    fn test_revert_floors_count_at_zero() {
        let officers = vec![create_test_officer(1, "A", None, 0)];
        let job = create_test_job(date!(2024 - 03 - 01), &["A"]);

        let updated = reconcile_transport_stats(&job, &officers, false);

        assert_eq!(updated[0].total_transports, 0);
    }

    #[test]
    fn test_complete_then_revert_restores_counts() {
        let officers = vec![
            create_test_officer(1, "A", Some(date!(2024 - 01 - 01)), 2),
            create_test_officer(2, "B", None, 0),
        ];
        let job = create_test_job(date!(2024 - 03 - 01), &["A", "B"]);

        let completed = reconcile_transport_stats(&job, &officers, true);
        let reverted = reconcile_transport_stats(&job, &completed, false);

        assert_eq!(reverted[0].total_transports, officers[0].total_transports);
        assert_eq!(reverted[1].total_transports, officers[1].total_transports);
        // last_transport does not round-trip; the advance survives the revert.
        assert_eq!(reverted[0].last_transport, Some(date!(2024 - 03 - 01)));
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let officers = vec![create_test_officer(1, "A", None, 1)];
        let job = create_test_job(date!(2024 - 03 - 01), &["Nobody", "A"]);

        let updated = reconcile_transport_stats(&job, &officers, true);

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].total_transports, 2);
    }

    #[test]
    fn test_no_named_officers_returns_roster_unchanged() {
        let officers = vec![
            create_test_officer(1, "A", None, 1),
            create_test_officer(2, "B", Some(date!(2024 - 01 - 01)), 5),
        ];
        let job = create_test_job(date!(2024 - 03 - 01), &[]);

        let updated = reconcile_transport_stats(&job, &officers, true);

        assert_eq!(updated, officers);
    }
}
