// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV parsing and validation for bulk roster and schedule import.
//!
//! This module parses delimited text into import rows without mutating any
//! state. Imports are atomic: any missing header or invalid row aborts the
//! whole file, so a partial insert can never happen. Headers are matched
//! case-insensitively after trimming and space/underscore normalization,
//! column order is free, and extra columns are ignored.

use csv::StringRecord;
use escort_roster::{OfficerImportRow, TransportImportRow};
use escort_roster_domain::{ClockTime, parse_iso_date};
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

use crate::error::ApiError;

/// Required CSV column headers for an officer import (normalized).
const REQUIRED_OFFICER_HEADERS: &[&str] = &["name", "badge", "contact"];

/// Required CSV column headers for a transport import (normalized).
const REQUIRED_TRANSPORT_HEADERS: &[&str] = &[
    "date",
    "prisoner_name",
    "prisoner_id",
    "pickup",
    "destination",
    "scheduled_time",
    "notes",
];

/// A row-level import failure. Converts into `ApiError::InvalidCsvFormat`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvRowError {
    /// A required field was missing or empty.
    #[error("row {row}: {field}: required field is missing or empty")]
    MissingField {
        /// 1-based data row number (excluding the header).
        row: usize,
        /// The normalized field name.
        field: &'static str,
    },
    /// A field value failed to parse.
    #[error("row {row}: {message}")]
    InvalidValue {
        /// 1-based data row number (excluding the header).
        row: usize,
        /// Description of the invalid value.
        message: String,
    },
}

impl From<CsvRowError> for ApiError {
    fn from(err: CsvRowError) -> Self {
        Self::InvalidCsvFormat {
            reason: err.to_string(),
        }
    }
}

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant
/// matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(
    headers: &StringRecord,
    required: &[&str],
) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !header_map.contains_key(**name))
        .map(ToString::to_string)
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Reads all records of a CSV document after validating its headers.
///
/// A document with no data rows is rejected; a malformed record aborts the
/// whole read.
fn read_records(
    csv_content: &str,
    required: &[&str],
) -> Result<(HashMap<String, usize>, Vec<StringRecord>), ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers, required)?;

    let mut records: Vec<StringRecord> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|e| {
            ApiError::from(CsvRowError::InvalidValue {
                row: idx + 1,
                message: format!("CSV parse error: {e}"),
            })
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: String::from(
                "CSV file must contain a header row and at least one data row.",
            ),
        });
    }

    Ok((header_map, records))
}

/// Extracts a trimmed, non-empty field from a record via the header map.
fn get_field(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<String> {
    header_map
        .get(name)
        .and_then(|&idx| record.get(idx))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses officer CSV content into import rows.
///
/// Expected headers: `Name,Badge,Contact` (case-insensitive, any order).
/// The contact value may be empty; name and badge may not.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
///
/// # Returns
///
/// All parsed rows, or the first error encountered. No partial result is
/// ever returned.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if a required header is missing,
/// the file has no data rows, or any row is invalid.
pub fn parse_officer_rows(csv_content: &str) -> Result<Vec<OfficerImportRow>, ApiError> {
    let (header_map, records) = read_records(csv_content, REQUIRED_OFFICER_HEADERS)?;

    let mut rows: Vec<OfficerImportRow> = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let row_number: usize = idx + 1;

        let name: String =
            get_field(record, &header_map, "name").ok_or(CsvRowError::MissingField {
                row: row_number,
                field: "name",
            })?;
        let badge: String =
            get_field(record, &header_map, "badge").ok_or(CsvRowError::MissingField {
                row: row_number,
                field: "badge",
            })?;
        let contact: String = get_field(record, &header_map, "contact").unwrap_or_default();

        rows.push(OfficerImportRow {
            name,
            badge,
            contact,
        });
    }

    info!(count = rows.len(), "Parsed officer import rows");
    Ok(rows)
}

/// Parses transport CSV content into import rows.
///
/// Expected headers:
/// `Date,Prisoner_Name,Prisoner_ID,Pickup,Destination,Scheduled_Time,Notes`
/// (case-insensitive, any order). The date must be `YYYY-MM-DD`; the
/// scheduled time may be empty or "HH:MM"; notes may be empty.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
///
/// # Returns
///
/// All parsed rows, or the first error encountered. No partial result is
/// ever returned.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if a required header is missing,
/// the file has no data rows, or any row is invalid.
pub fn parse_transport_rows(csv_content: &str) -> Result<Vec<TransportImportRow>, ApiError> {
    let (header_map, records) = read_records(csv_content, REQUIRED_TRANSPORT_HEADERS)?;

    let mut rows: Vec<TransportImportRow> = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let row_number: usize = idx + 1;

        let date_str: String =
            get_field(record, &header_map, "date").ok_or(CsvRowError::MissingField {
                row: row_number,
                field: "date",
            })?;
        let date = parse_iso_date(&date_str).map_err(|e| CsvRowError::InvalidValue {
            row: row_number,
            message: e.to_string(),
        })?;

        let prisoner_name: String = get_field(record, &header_map, "prisoner_name").ok_or(
            CsvRowError::MissingField {
                row: row_number,
                field: "prisoner_name",
            },
        )?;

        let scheduled_time_str: String =
            get_field(record, &header_map, "scheduled_time").unwrap_or_default();
        let scheduled_pickup_time: Option<ClockTime> =
            ClockTime::parse_optional(&scheduled_time_str).map_err(|e| {
                CsvRowError::InvalidValue {
                    row: row_number,
                    message: e.to_string(),
                }
            })?;

        rows.push(TransportImportRow {
            date,
            prisoner_name,
            prisoner_id: get_field(record, &header_map, "prisoner_id").unwrap_or_default(),
            pickup: get_field(record, &header_map, "pickup").unwrap_or_default(),
            destination: get_field(record, &header_map, "destination").unwrap_or_default(),
            scheduled_pickup_time,
            notes: get_field(record, &header_map, "notes").unwrap_or_default(),
        });
    }

    info!(count = rows.len(), "Parsed transport import rows");
    Ok(rows)
}
