// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV serialization of the transport report.
//!
//! The report covers every non-Canceled job (scheduled and completed alike)
//! so it serves both active-work and archive reporting. An empty report is
//! an informational outcome for the caller, not an error; `row_count`
//! carries the distinction.

use escort_roster_domain::{TransportJob, TransportStatus, format_iso_date};
use tracing::info;

use crate::error::ApiError;
use crate::request_response::clock_or_empty;

/// Column headers of the transport report.
pub const EXPORT_HEADERS: [&str; 12] = [
    "ID",
    "Date",
    "Prisoner_ID",
    "Prisoner_Name",
    "Pickup",
    "Destination",
    "Scheduled_Time",
    "Actual_Pickup",
    "Actual_Dropoff",
    "Officers",
    "Status",
    "Notes",
];

/// A serialized transport report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// The CSV document, headers included.
    pub csv: String,
    /// Number of data rows (excluding the header).
    pub row_count: usize,
}

/// Serializes all non-Canceled transport jobs to CSV.
///
/// Assigned officer names are joined with "; " into a single column.
///
/// # Arguments
///
/// * `schedule` - The full job list; Canceled jobs are filtered out here
///
/// # Errors
///
/// Returns `ApiError::Internal` if CSV serialization fails.
pub fn export_transports(schedule: &[TransportJob]) -> Result<ExportResult, ApiError> {
    let jobs: Vec<&TransportJob> = schedule
        .iter()
        .filter(|job| job.status != TransportStatus::Canceled)
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(EXPORT_HEADERS)
        .map_err(internal_error)?;

    for job in &jobs {
        writer
            .write_record([
                job.transport_id.to_string(),
                format_iso_date(job.date),
                job.prisoner_id.clone(),
                job.prisoner_name.clone(),
                job.pickup.clone(),
                job.destination.clone(),
                clock_or_empty(job.scheduled_pickup_time),
                clock_or_empty(job.actual_pickup_time),
                clock_or_empty(job.actual_dropoff_time),
                job.officers.join("; "),
                job.status.to_string(),
                job.notes.clone(),
            ])
            .map_err(internal_error)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(internal_error)?;
    let csv: String = String::from_utf8(bytes).map_err(internal_error)?;

    info!(row_count = jobs.len(), "Serialized transport report");
    Ok(ExportResult {
        csv,
        row_count: jobs.len(),
    })
}

/// Wraps a serialization failure as an internal API error.
fn internal_error<E: std::fmt::Display>(err: E) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to serialize transport report: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escort_roster_domain::{ClockTime, TransportId};
    use time::macros::date;

    fn test_job(transport_id: i64, status: TransportStatus) -> TransportJob {
        TransportJob {
            transport_id: TransportId::new(transport_id),
            date: date!(2024 - 06 - 10),
            prisoner_name: String::from("Maria Garcia"),
            prisoner_id: String::from("B123-876"),
            pickup: String::from("Tarrant County Jail"),
            destination: String::from("Gatesville Unit"),
            officers: vec![String::from("John Smith"), String::from("Jane Doe")],
            status,
            notes: String::from("Routine"),
            scheduled_pickup_time: ClockTime::from_hm(9, 30),
            actual_pickup_time: None,
            actual_dropoff_time: None,
        }
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_export_includes_header_and_rows() {
        let schedule = vec![test_job(1, TransportStatus::Scheduled)];

        let result = export_transports(&schedule).expect("export should succeed");

        assert_eq!(result.row_count, 1);
        let mut lines = result.csv.lines();
        let header = lines.next().expect("header line");
        assert!(header.starts_with("ID,Date,Prisoner_ID,Prisoner_Name"));
        let row = lines.next().expect("data line");
        assert!(row.contains("Maria Garcia"));
        assert!(row.contains("09:30"));
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_export_joins_officers_with_semicolons() {
        let schedule = vec![test_job(1, TransportStatus::Completed)];

        let result = export_transports(&schedule).expect("export should succeed");

        assert!(result.csv.contains("John Smith; Jane Doe"));
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_export_excludes_canceled_jobs() {
        let schedule = vec![
            test_job(1, TransportStatus::Scheduled),
            test_job(2, TransportStatus::Canceled),
            test_job(3, TransportStatus::Completed),
        ];

        let result = export_transports(&schedule).expect("export should succeed");

        assert_eq!(result.row_count, 2);
        assert!(!result.csv.contains("Canceled"));
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_export_of_empty_schedule_has_zero_rows() {
        let result = export_transports(&[]).expect("export should succeed");

        assert_eq!(result.row_count, 0);
        assert_eq!(result.csv.lines().count(), 1);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_export_quotes_fields_containing_commas() {
        let mut job = test_job(1, TransportStatus::Scheduled);
        job.destination = String::from("Federal Medical Center, Fort Worth");

        let result = export_transports(&[job]).expect("export should succeed");

        assert!(
            result
                .csv
                .contains("\"Federal Medical Center, Fort Worth\"")
        );
    }
}
