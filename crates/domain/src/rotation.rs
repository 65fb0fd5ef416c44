// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rotation recommendation: which officers should take the next transport.
//!
//! This module provides deterministic officer selection for a target date.
//! The rotation policy prefers officers who have gone longest without a
//! transport assignment.
//!
//! ## Eligibility Rules (Authoritative)
//!
//! An officer is eligible for `target_date` when:
//! 1. Their weekly availability for the date's weekday is `Available`
//! 2. No time-off request's inclusive `[start, end]` range contains the date
//!
//! ## Ordering Rules
//!
//! Eligible officers are ordered ascending by last-transport date. An officer
//! who has never transported sorts before every officer who has. The sort is
//! stable: equal last-transport dates keep roster order.
//!
//! ## Usage
//!
//! This logic is used by:
//! - The assignment-suggestion operation for a scheduled transport
//! - Roster planning checks in tests

use crate::types::{Officer, OfficerId, TimeOffRequest, Weekday};
use time::Date;

/// One officer put forward by the rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationCandidate {
    /// The officer's canonical ID.
    pub officer_id: OfficerId,
    /// The officer's display name.
    pub name: String,
    /// The officer's last-transport date (for transparency).
    pub last_transport: Option<Date>,
}

impl RotationCandidate {
    /// Creates a candidate from an officer.
    #[must_use]
    pub fn from_officer(officer: &Officer) -> Self {
        Self {
            officer_id: officer.officer_id,
            name: officer.name.clone(),
            last_transport: officer.last_transport,
        }
    }
}

/// The primary and (when available) secondary officer recommended for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationRecommendation {
    /// First officer in the rotation.
    pub primary: RotationCandidate,
    /// Second officer in the rotation, if a second eligible officer exists.
    pub secondary: Option<RotationCandidate>,
}

/// Computes the recommended officers for a target date.
///
/// # Arguments
///
/// * `target_date` - The transport date to staff
/// * `officers` - The full roster
/// * `time_off` - The full time-off list
///
/// # Returns
///
/// `Some(RotationRecommendation)` with the first eligible officer as primary
/// and the second (if any) as secondary, or `None` when no officer is
/// eligible for the date. An empty result is informational, not an error.
///
/// Pure function of its three inputs; no side effects.
#[must_use]
pub fn recommend(
    target_date: Date,
    officers: &[Officer],
    time_off: &[TimeOffRequest],
) -> Option<RotationRecommendation> {
    let weekday: Weekday = Weekday::of_date(target_date);

    let mut eligible: Vec<&Officer> = officers
        .iter()
        .filter(|officer| {
            let generally_available: bool =
                officer.availability.status_for(weekday).is_available();
            let on_time_off: bool = time_off.iter().any(|request| {
                request.officer_id == officer.officer_id && request.contains(target_date)
            });
            generally_available && !on_time_off
        })
        .collect();

    // `Option<Date>` orders `None` first, so never-transported officers lead
    // the rotation. Stable sort keeps roster order for equal dates.
    eligible.sort_by(|a, b| a.last_transport.cmp(&b.last_transport));

    let mut ranked = eligible.into_iter();
    let primary: RotationCandidate = RotationCandidate::from_officer(ranked.next()?);
    let secondary: Option<RotationCandidate> = ranked.next().map(RotationCandidate::from_officer);

    Some(RotationRecommendation { primary, secondary })
}
