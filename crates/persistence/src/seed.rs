// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in default dataset.
//!
//! Used on first run (no stored snapshot) and as the fallback when a stored
//! payload cannot be read or parsed. This is the only recovery behavior in
//! the system: a corrupt snapshot is logged and replaced by seed data, never
//! surfaced as a blocking error.

use escort_roster::RosterState;
use escort_roster_domain::{
    Availability, AvailabilityStatus, ClockTime, Officer, OfficerId, TimeOffId, TimeOffRequest,
    TransportId, TransportJob, TransportStatus,
};
use time::macros::date;
use time::{Date, OffsetDateTime};

/// The default officer roster.
#[must_use]
pub fn seed_officers() -> Vec<Officer> {
    vec![
        Officer {
            officer_id: OfficerId::new(1),
            name: String::from("John Smith"),
            badge: String::from("12345"),
            contact: String::from("(555) 123-4567"),
            last_transport: Some(date!(2024 - 05 - 10)),
            total_transports: 5,
            availability: Availability {
                monday: AvailabilityStatus::Available,
                tuesday: AvailabilityStatus::Available,
                wednesday: AvailabilityStatus::Off,
                thursday: AvailabilityStatus::Available,
                friday: AvailabilityStatus::Available,
                saturday: AvailabilityStatus::Off,
                sunday: AvailabilityStatus::Off,
            },
        },
        Officer {
            officer_id: OfficerId::new(2),
            name: String::from("Jane Doe"),
            badge: String::from("54321"),
            contact: String::from("(555) 987-6543"),
            last_transport: Some(date!(2024 - 05 - 15)),
            total_transports: 8,
            availability: Availability {
                monday: AvailabilityStatus::Available,
                tuesday: AvailabilityStatus::Available,
                wednesday: AvailabilityStatus::Available,
                thursday: AvailabilityStatus::Available,
                friday: AvailabilityStatus::Available,
                saturday: AvailabilityStatus::Training,
                sunday: AvailabilityStatus::Training,
            },
        },
        Officer {
            officer_id: OfficerId::new(3),
            name: String::from("Mike Johnson"),
            badge: String::from("67890"),
            contact: String::from("(555) 555-1212"),
            last_transport: Some(date!(2024 - 04 - 20)),
            total_transports: 3,
            availability: Availability {
                monday: AvailabilityStatus::Off,
                tuesday: AvailabilityStatus::Off,
                wednesday: AvailabilityStatus::Available,
                thursday: AvailabilityStatus::Available,
                friday: AvailabilityStatus::Available,
                saturday: AvailabilityStatus::Available,
                sunday: AvailabilityStatus::Available,
            },
        },
        Officer {
            officer_id: OfficerId::new(4),
            name: String::from("Emily White"),
            badge: String::from("13579"),
            contact: String::from("(555) 867-5309"),
            last_transport: Some(date!(2024 - 06 - 01)),
            total_transports: 12,
            availability: Availability::uniform(AvailabilityStatus::Available),
        },
    ]
}

/// The default transport schedule.
///
/// The two open transports are dated "today" so a fresh install shows
/// current work; the completed one carries a fixed historical date.
#[must_use]
pub fn seed_schedule() -> Vec<TransportJob> {
    let today: Date = OffsetDateTime::now_utc().date();

    vec![
        TransportJob {
            transport_id: TransportId::new(1),
            date: today,
            prisoner_name: String::from("Robert \"Slick\" Johnson"),
            prisoner_id: String::from("A789-234"),
            pickup: String::from("Denton County Jail"),
            destination: String::from("Huntsville Unit"),
            officers: vec![String::from("John Smith"), String::from("Jane Doe")],
            status: TransportStatus::Scheduled,
            notes: String::from("High risk transport."),
            scheduled_pickup_time: ClockTime::from_hm(8, 0),
            actual_pickup_time: None,
            actual_dropoff_time: None,
        },
        TransportJob {
            transport_id: TransportId::new(2),
            date: today,
            prisoner_name: String::from("Maria Garcia"),
            prisoner_id: String::from("B123-876"),
            pickup: String::from("Tarrant County Jail"),
            destination: String::from("Gatesville Unit"),
            officers: vec![String::from("Emily White")],
            status: TransportStatus::Scheduled,
            notes: String::new(),
            scheduled_pickup_time: ClockTime::from_hm(9, 30),
            actual_pickup_time: None,
            actual_dropoff_time: None,
        },
        TransportJob {
            transport_id: TransportId::new(3),
            date: date!(2024 - 05 - 30),
            prisoner_name: String::from("David Chen"),
            prisoner_id: String::from("C567-112"),
            pickup: String::from("Collin County Jail"),
            destination: String::from("Federal Medical Center, Fort Worth"),
            officers: vec![String::from("Mike Johnson")],
            status: TransportStatus::Completed,
            notes: String::from("Medical transfer."),
            scheduled_pickup_time: ClockTime::from_hm(14, 0),
            actual_pickup_time: ClockTime::from_hm(14, 5),
            actual_dropoff_time: ClockTime::from_hm(15, 2),
        },
    ]
}

/// The default time-off list.
#[must_use]
pub fn seed_time_off() -> Vec<TimeOffRequest> {
    vec![TimeOffRequest {
        time_off_id: TimeOffId::new(1),
        officer_id: OfficerId::new(2),
        start: date!(2024 - 06 - 20),
        end: date!(2024 - 06 - 25),
        reason: String::from("Vacation"),
    }]
}

/// The complete default dataset.
#[must_use]
pub fn seed_state() -> RosterState {
    RosterState {
        officers: seed_officers(),
        schedule: seed_schedule(),
        time_off: seed_time_off(),
    }
}
