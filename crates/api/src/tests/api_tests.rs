// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used)]

use crate::{
    ApiError, AvailabilityForm, ChangeStatusRequest, SaveOfficerRequest, SaveTimeOffRequest,
    SaveTransportRequest, add_officer, add_time_off, change_transport_status, delete_officer,
    delete_transport, export_transports_report, import_officers_csv, import_transports_csv,
    list_officers, list_time_off, list_transports, schedule_transport, update_officer,
    update_transport,
};
use escort_roster::RosterState;

fn available_all_week() -> AvailabilityForm {
    AvailabilityForm {
        monday: String::from("Available"),
        tuesday: String::from("Available"),
        wednesday: String::from("Available"),
        thursday: String::from("Available"),
        friday: String::from("Available"),
        saturday: String::from("Available"),
        sunday: String::from("Available"),
    }
}

fn officer_request(name: &str) -> SaveOfficerRequest {
    SaveOfficerRequest {
        name: name.to_string(),
        badge: format!("B-{name}"),
        contact: String::from("(555) 000-0000"),
        availability: available_all_week(),
    }
}

fn transport_request(date: &str, officers: &[&str]) -> SaveTransportRequest {
    SaveTransportRequest {
        date: date.to_string(),
        prisoner_name: String::from("Maria Garcia"),
        prisoner_id: String::from("B123-876"),
        pickup: String::from("Tarrant County Jail"),
        destination: String::from("Gatesville Unit"),
        officers: officers.iter().map(ToString::to_string).collect(),
        status: String::from("Scheduled"),
        notes: String::new(),
        scheduled_pickup_time: String::from("09:30"),
        actual_pickup_time: String::new(),
        actual_dropoff_time: String::new(),
    }
}

fn state_with_officer(name: &str) -> RosterState {
    add_officer(&RosterState::new(), &officer_request(name))
        .expect("add should succeed")
        .new_state
}

#[test]
fn test_add_and_list_officers() {
    let state = state_with_officer("John Smith");

    let views = list_officers(&state);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "John Smith");
    assert_eq!(views[0].total_transports, 0);
    assert!(views[0].last_transport.is_none());
    assert_eq!(views[0].availability.monday, "Available");
}

#[test]
fn test_add_officer_rejects_unknown_availability_status() {
    let mut request = officer_request("John Smith");
    request.availability.wednesday = String::from("Maybe");

    let result = add_officer(&RosterState::new(), &request);

    match result {
        Err(ApiError::InvalidInput { field, .. }) => {
            assert_eq!(field, "availability.wednesday");
        }
        _ => panic!("Expected InvalidInput error"),
    }
}

#[test]
fn test_availability_parse_accepts_mixed_case() {
    let mut request = officer_request("John Smith");
    request.availability.saturday = String::from("off");
    request.availability.sunday = String::from("TRAINING");

    let state = add_officer(&RosterState::new(), &request)
        .expect("add should succeed")
        .new_state;

    let views = list_officers(&state);
    assert_eq!(views[0].availability.saturday, "Off");
    assert_eq!(views[0].availability.sunday, "Training");
}

#[test]
fn test_update_officer_preserves_statistics() {
    let state = state_with_officer("John Smith");
    let state = schedule_transport(&state, &transport_request("2024-06-10", &["John Smith"]))
        .expect("schedule should succeed")
        .new_state;
    let transport_id = state.schedule[0].transport_id.value();
    let state = change_transport_status(
        &state,
        transport_id,
        &ChangeStatusRequest {
            status: String::from("Completed"),
        },
    )
    .expect("status change should succeed")
    .new_state;

    let officer_id = state.officers[0].officer_id.value();
    let mut request = officer_request("John Smith");
    request.contact = String::from("(555) 999-9999");
    let state = update_officer(&state, officer_id, &request)
        .expect("update should succeed")
        .new_state;

    let views = list_officers(&state);
    assert_eq!(views[0].contact, "(555) 999-9999");
    assert_eq!(views[0].total_transports, 1);
    assert_eq!(views[0].last_transport.as_deref(), Some("2024-06-10"));
}

#[test]
fn test_update_unknown_officer_is_not_found() {
    let result = update_officer(&RosterState::new(), 42, &officer_request("Ghost"));

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_delete_officer() {
    let state = state_with_officer("John Smith");
    let officer_id = state.officers[0].officer_id.value();

    let state = delete_officer(&state, officer_id)
        .expect("delete should succeed")
        .new_state;
    assert!(list_officers(&state).is_empty());

    assert!(matches!(
        delete_officer(&state, officer_id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_status_change_round_trip_through_api() {
    let state = state_with_officer("John Smith");
    let state = schedule_transport(&state, &transport_request("2024-03-01", &["John Smith"]))
        .expect("schedule should succeed")
        .new_state;
    let transport_id = state.schedule[0].transport_id.value();

    let state = change_transport_status(
        &state,
        transport_id,
        &ChangeStatusRequest {
            status: String::from("Completed"),
        },
    )
    .expect("completion should succeed")
    .new_state;
    assert_eq!(list_officers(&state)[0].total_transports, 1);

    let state = change_transport_status(
        &state,
        transport_id,
        &ChangeStatusRequest {
            status: String::from("Scheduled"),
        },
    )
    .expect("revert should succeed")
    .new_state;
    assert_eq!(list_officers(&state)[0].total_transports, 0);
    // The advance survives the revert.
    assert_eq!(
        list_officers(&state)[0].last_transport.as_deref(),
        Some("2024-03-01")
    );
}

#[test]
fn test_status_change_rejects_unknown_status() {
    let state = state_with_officer("John Smith");
    let state = schedule_transport(&state, &transport_request("2024-03-01", &[]))
        .expect("schedule should succeed")
        .new_state;

    let result = change_transport_status(
        &state,
        state.schedule[0].transport_id.value(),
        &ChangeStatusRequest {
            status: String::from("Done"),
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_update_transport_parses_actual_times() {
    let state = state_with_officer("John Smith");
    let state = schedule_transport(&state, &transport_request("2024-03-01", &["John Smith"]))
        .expect("schedule should succeed")
        .new_state;
    let transport_id = state.schedule[0].transport_id.value();

    let mut request = transport_request("2024-03-01", &["John Smith"]);
    request.status = String::from("Completed");
    request.actual_pickup_time = String::from("14:05");
    request.actual_dropoff_time = String::from("15:02");

    let state = update_transport(&state, transport_id, &request)
        .expect("update should succeed")
        .new_state;

    let views = list_transports(&state, None).expect("list should succeed");
    assert_eq!(views[0].status, "Completed");
    assert_eq!(views[0].actual_pickup_time, "14:05");
    assert_eq!(views[0].actual_dropoff_time, "15:02");
    // The boundary crossing reconciled statistics.
    assert_eq!(list_officers(&state)[0].total_transports, 1);
}

#[test]
fn test_list_transports_status_filter() {
    let state = state_with_officer("John Smith");
    let state = schedule_transport(&state, &transport_request("2024-03-01", &[]))
        .expect("schedule should succeed")
        .new_state;
    let state = schedule_transport(&state, &transport_request("2024-03-02", &[]))
        .expect("schedule should succeed")
        .new_state;
    let first_id = state.schedule[0].transport_id.value();
    let state = change_transport_status(
        &state,
        first_id,
        &ChangeStatusRequest {
            status: String::from("Completed"),
        },
    )
    .expect("completion should succeed")
    .new_state;

    let archived = list_transports(&state, Some("Completed")).expect("list should succeed");
    assert_eq!(archived.len(), 1);
    let open = list_transports(&state, Some("Scheduled")).expect("list should succeed");
    assert_eq!(open.len(), 1);
    let all = list_transports(&state, None).expect("list should succeed");
    assert_eq!(all.len(), 2);

    assert!(matches!(
        list_transports(&state, Some("Archived")),
        Err(ApiError::InvalidInput { .. })
    ));
}

#[test]
fn test_delete_transport_not_found() {
    assert!(matches!(
        delete_transport(&RosterState::new(), 5),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_add_time_off_and_list_resolves_officer_name() {
    let state = state_with_officer("Jane Doe");
    let officer_id = state.officers[0].officer_id.value();

    let state = add_time_off(
        &state,
        &SaveTimeOffRequest {
            officer_id,
            start: String::from("2024-06-20"),
            end: String::from("2024-06-25"),
            reason: String::from("Vacation"),
        },
    )
    .expect("add should succeed")
    .new_state;

    let views = list_time_off(&state);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].officer_name.as_deref(), Some("Jane Doe"));
    assert_eq!(views[0].start, "2024-06-20");
}

#[test]
fn test_add_time_off_rejects_bad_date_string() {
    let state = state_with_officer("Jane Doe");
    let result = add_time_off(
        &state,
        &SaveTimeOffRequest {
            officer_id: state.officers[0].officer_id.value(),
            start: String::from("June 20"),
            end: String::from("2024-06-25"),
            reason: String::from("Vacation"),
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_add_time_off_inverted_range_is_rule_violation() {
    let state = state_with_officer("Jane Doe");
    let result = add_time_off(
        &state,
        &SaveTimeOffRequest {
            officer_id: state.officers[0].officer_id.value(),
            start: String::from("2024-06-25"),
            end: String::from("2024-06-20"),
            reason: String::from("Vacation"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { .. })
    ));
}

#[test]
fn test_import_officers_csv_end_to_end() {
    let csv = "Name,Badge,Contact\nAlice Brown,11111,(555) 111-1111\nBob Gray,22222,\n";

    let result =
        import_officers_csv(&RosterState::new(), csv).expect("import should succeed");

    assert_eq!(result.new_state.officers.len(), 2);
    assert_eq!(result.notice.message, "2 officers imported!");
    // Import defaults: weekdays available, weekend off.
    assert_eq!(
        list_officers(&result.new_state)[0].availability.saturday,
        "Off"
    );
}

#[test]
fn test_import_officers_csv_missing_header_adds_nothing() {
    let state = state_with_officer("John Smith");
    let csv = "Name,Contact\nAlice Brown,(555) 111-1111\n";

    let result = import_officers_csv(&state, csv);

    assert!(matches!(result, Err(ApiError::InvalidCsvFormat { .. })));
    assert_eq!(state.officers.len(), 1);
}

#[test]
fn test_import_transports_csv_end_to_end() {
    let csv = "Date,Prisoner_Name,Prisoner_ID,Pickup,Destination,Scheduled_Time,Notes\n\
               2024-07-01,Maria Garcia,B123-876,Tarrant County Jail,Gatesville Unit,09:30,Routine\n";

    let result =
        import_transports_csv(&RosterState::new(), csv).expect("import should succeed");

    assert_eq!(result.new_state.schedule.len(), 1);
    let views = list_transports(&result.new_state, None).expect("list should succeed");
    assert_eq!(views[0].status, "Scheduled");
    assert!(views[0].officers.is_empty());
}

#[test]
fn test_export_report_round_trip() {
    let state = state_with_officer("John Smith");
    let state = schedule_transport(&state, &transport_request("2024-03-01", &["John Smith"]))
        .expect("schedule should succeed")
        .new_state;

    let report = export_transports_report(&state).expect("export should succeed");

    assert_eq!(report.row_count, 1);
    assert!(report.csv.contains("Maria Garcia"));
    assert!(report.csv.contains("John Smith"));
}
