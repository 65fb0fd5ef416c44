// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dates;
mod error;
mod reconcile;
mod rotation;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{format_iso_date, parse_iso_date};
pub use reconcile::reconcile_transport_stats;
pub use rotation::{RotationCandidate, RotationRecommendation, recommend};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Availability, AvailabilityStatus, ClockTime, Officer, OfficerId, TimeOffId, TimeOffRequest,
    TransportId, TransportJob, TransportStatus, Weekday,
};
pub use validation::{
    validate_job_fields, validate_officer_exists, validate_officer_fields,
    validate_time_off_range,
};
