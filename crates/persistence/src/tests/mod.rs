// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used)]

use crate::{KEY_OFFICERS, Persistence, seed_state, upsert_snapshot};
use escort_roster::RosterState;
use escort_roster_domain::{Availability, Officer, OfficerId};
use time::macros::date;

fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

fn custom_state() -> RosterState {
    let mut officer = Officer::new(
        OfficerId::new(7),
        String::from("Test Officer"),
        String::from("99999"),
        String::from("(555) 777-7777"),
        Availability::default(),
    );
    officer.last_transport = Some(date!(2024 - 04 - 01));
    officer.total_transports = 2;

    RosterState {
        officers: vec![officer],
        schedule: Vec::new(),
        time_off: Vec::new(),
    }
}

#[test]
fn test_first_run_loads_seed_data() {
    let mut persistence = create_test_persistence();

    let state = persistence.load_state();

    assert_eq!(state.officers.len(), 4);
    assert_eq!(state.officers[0].name, "John Smith");
    assert_eq!(state.schedule.len(), 3);
    assert_eq!(state.time_off.len(), 1);
    assert_eq!(state.time_off[0].officer_id, OfficerId::new(2));
}

#[test]
fn test_save_then_load_round_trips() {
    let mut persistence = create_test_persistence();
    let state = custom_state();

    persistence.save_state(&state).expect("save should succeed");
    let loaded = persistence.load_state();

    // The two open seed transports are dated at load time, so compare
    // collections that were actually written.
    assert_eq!(loaded.officers, state.officers);
    assert_eq!(loaded.schedule, state.schedule);
    assert_eq!(loaded.time_off, state.time_off);
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let mut persistence = create_test_persistence();
    let first = custom_state();
    persistence.save_state(&first).expect("save should succeed");

    let mut second = first.clone();
    second.officers[0].total_transports = 9;
    persistence.save_state(&second).expect("save should succeed");

    let loaded = persistence.load_state();
    assert_eq!(loaded.officers[0].total_transports, 9);
}

#[test]
fn test_corrupt_payload_falls_back_to_seed_for_that_key_only() {
    let mut persistence = create_test_persistence();
    let state = custom_state();
    persistence.save_state(&state).expect("save should succeed");

    // Corrupt only the officers payload.
    upsert_snapshot(&mut persistence.conn, KEY_OFFICERS, "{not json")
        .expect("raw write should succeed");

    let loaded = persistence.load_state();

    // Officers fall back to the seed roster; the other keys keep the saved
    // (empty) collections.
    assert_eq!(loaded.officers, seed_state().officers);
    assert!(loaded.schedule.is_empty());
    assert!(loaded.time_off.is_empty());
}

#[test]
fn test_wrong_shape_payload_falls_back_to_seed() {
    let mut persistence = create_test_persistence();
    let state = custom_state();
    persistence.save_state(&state).expect("save should succeed");

    // Valid JSON, wrong shape.
    upsert_snapshot(&mut persistence.conn, KEY_OFFICERS, "{\"officers\": 1}")
        .expect("raw write should succeed");

    let loaded = persistence.load_state();
    assert_eq!(loaded.officers, seed_state().officers);
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = create_test_persistence();
    let mut second = create_test_persistence();

    first
        .save_state(&custom_state())
        .expect("save should succeed");

    // The second database saw no write, so it serves seed data.
    let loaded = second.load_state();
    assert_eq!(loaded.officers.len(), 4);
}

#[test]
fn test_seed_dataset_is_internally_consistent() {
    let seed = seed_state();

    // Every time-off request references a roster officer.
    for request in &seed.time_off {
        assert!(
            seed.officers
                .iter()
                .any(|officer| officer.officer_id == request.officer_id)
        );
    }

    // Every assigned name on a seed job matches a roster officer.
    for job in &seed.schedule {
        for name in &job.officers {
            assert!(seed.officers.iter().any(|officer| &officer.name == name));
        }
    }
}
