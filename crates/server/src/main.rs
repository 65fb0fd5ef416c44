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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use escort_roster::{Notice, RosterState, TransitionResult};
use escort_roster_api::{
    ApiError, AvailabilityForm, ChangeStatusRequest, OfficerView, RecommendRotationRequest,
    RotationAdvice, RotationCandidateView, SaveOfficerRequest, SaveTimeOffRequest,
    SaveTransportRequest, TimeOffView, TransportView, add_officer, add_time_off,
    change_transport_status, delete_officer, delete_time_off, delete_transport,
    export_transports_report, import_officers_csv, import_transports_csv, list_officers,
    list_time_off, list_transports, recommend_rotation, schedule_transport, update_officer,
    update_time_off, update_transport,
};
use escort_roster_persistence::{Persistence, PersistenceError};

/// Escort Roster Server - HTTP server for the escort roster system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The in-memory snapshot and the persistence adapter are each behind a
/// mutex; mutations hold the snapshot lock for the whole
/// apply → write-through → swap sequence so updates are serialized.
#[derive(Clone)]
struct AppState {
    /// The current state snapshot.
    state: Arc<Mutex<RosterState>>,
    /// The persistence layer for state snapshots.
    persistence: Arc<Mutex<Persistence>>,
}

/// Weekly availability as one status string per weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityApi {
    /// Monday's status.
    monday: String,
    /// Tuesday's status.
    tuesday: String,
    /// Wednesday's status.
    wednesday: String,
    /// Thursday's status.
    thursday: String,
    /// Friday's status.
    friday: String,
    /// Saturday's status.
    saturday: String,
    /// Sunday's status.
    sunday: String,
}

impl AvailabilityApi {
    /// Converts the wire value into the API boundary form.
    fn into_form(self) -> AvailabilityForm {
        AvailabilityForm {
            monday: self.monday,
            tuesday: self.tuesday,
            wednesday: self.wednesday,
            thursday: self.thursday,
            friday: self.friday,
            saturday: self.saturday,
            sunday: self.sunday,
        }
    }

    /// Builds the wire value from the API boundary form.
    fn from_form(form: AvailabilityForm) -> Self {
        Self {
            monday: form.monday,
            tuesday: form.tuesday,
            wednesday: form.wednesday,
            thursday: form.thursday,
            friday: form.friday,
            saturday: form.saturday,
            sunday: form.sunday,
        }
    }
}

/// API request for adding or updating an officer.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveOfficerApiRequest {
    /// The officer's display name.
    name: String,
    /// The officer's badge code.
    badge: String,
    /// The officer's contact string.
    #[serde(default)]
    contact: String,
    /// The officer's weekly availability.
    availability: AvailabilityApi,
}

impl SaveOfficerApiRequest {
    /// Converts the wire request into the API boundary request.
    fn into_request(self) -> SaveOfficerRequest {
        SaveOfficerRequest {
            name: self.name,
            badge: self.badge,
            contact: self.contact,
            availability: self.availability.into_form(),
        }
    }
}

/// Default status for transport save requests.
fn default_status() -> String {
    String::from("Scheduled")
}

/// API request for scheduling or updating a transport job.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveTransportApiRequest {
    /// Calendar date, `YYYY-MM-DD`.
    date: String,
    /// Prisoner display name.
    prisoner_name: String,
    /// Prisoner booking identifier.
    #[serde(default)]
    prisoner_id: String,
    /// Pickup location.
    #[serde(default)]
    pickup: String,
    /// Destination location.
    #[serde(default)]
    destination: String,
    /// Assigned officer display names.
    #[serde(default)]
    officers: Vec<String>,
    /// Lifecycle status. Ignored on creation.
    #[serde(default = "default_status")]
    status: String,
    /// Free-text notes.
    #[serde(default)]
    notes: String,
    /// Planned pickup time, "HH:MM" or empty.
    #[serde(default)]
    scheduled_pickup_time: String,
    /// Recorded pickup time, "HH:MM" or empty.
    #[serde(default)]
    actual_pickup_time: String,
    /// Recorded dropoff time, "HH:MM" or empty.
    #[serde(default)]
    actual_dropoff_time: String,
}

impl SaveTransportApiRequest {
    /// Converts the wire request into the API boundary request.
    fn into_request(self) -> SaveTransportRequest {
        SaveTransportRequest {
            date: self.date,
            prisoner_name: self.prisoner_name,
            prisoner_id: self.prisoner_id,
            pickup: self.pickup,
            destination: self.destination,
            officers: self.officers,
            status: self.status,
            notes: self.notes,
            scheduled_pickup_time: self.scheduled_pickup_time,
            actual_pickup_time: self.actual_pickup_time,
            actual_dropoff_time: self.actual_dropoff_time,
        }
    }
}

/// API request for moving a transport job to a new status.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChangeStatusApiRequest {
    /// The status to move to.
    status: String,
}

/// API request for adding or updating a time-off request.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveTimeOffApiRequest {
    /// The officer the request belongs to.
    officer_id: i64,
    /// Inclusive start date, `YYYY-MM-DD`.
    start: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    end: String,
    /// Free-text reason.
    #[serde(default)]
    reason: String,
}

impl SaveTimeOffApiRequest {
    /// Converts the wire request into the API boundary request.
    fn into_request(self) -> SaveTimeOffRequest {
        SaveTimeOffRequest {
            officer_id: self.officer_id,
            start: self.start,
            end: self.end,
            reason: self.reason,
        }
    }
}

/// API request for a rotation recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecommendRotationApiRequest {
    /// The transport date to staff, `YYYY-MM-DD`.
    target_date: String,
}

/// Query parameters for listing transport jobs.
#[derive(Debug, Deserialize)]
struct ListScheduleQuery {
    /// Optional status filter; the archive view is `Completed`.
    status: Option<String>,
}

/// Officer payload in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OfficerApiResponse {
    /// The officer's identifier.
    officer_id: i64,
    /// The officer's display name.
    name: String,
    /// The officer's badge code.
    badge: String,
    /// The officer's contact string.
    contact: String,
    /// Last-transport date, absent when never transported.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_transport: Option<String>,
    /// Cumulative completed-transport count.
    total_transports: u32,
    /// Weekly availability.
    availability: AvailabilityApi,
}

impl OfficerApiResponse {
    /// Builds the wire payload from the API boundary view.
    fn from_view(view: OfficerView) -> Self {
        Self {
            officer_id: view.officer_id,
            name: view.name,
            badge: view.badge,
            contact: view.contact,
            last_transport: view.last_transport,
            total_transports: view.total_transports,
            availability: AvailabilityApi::from_form(view.availability),
        }
    }
}

/// API response for listing officers.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListOfficersApiResponse {
    /// The officer roster.
    officers: Vec<OfficerApiResponse>,
}

/// Transport payload in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransportApiResponse {
    /// The transport's identifier.
    transport_id: i64,
    /// Calendar date, `YYYY-MM-DD`.
    date: String,
    /// Prisoner display name.
    prisoner_name: String,
    /// Prisoner booking identifier.
    prisoner_id: String,
    /// Pickup location.
    pickup: String,
    /// Destination location.
    destination: String,
    /// Assigned officer display names.
    officers: Vec<String>,
    /// Lifecycle status.
    status: String,
    /// Free-text notes.
    notes: String,
    /// Planned pickup time, "HH:MM" or empty.
    scheduled_pickup_time: String,
    /// Recorded pickup time, "HH:MM" or empty.
    actual_pickup_time: String,
    /// Recorded dropoff time, "HH:MM" or empty.
    actual_dropoff_time: String,
}

impl TransportApiResponse {
    /// Builds the wire payload from the API boundary view.
    fn from_view(view: TransportView) -> Self {
        Self {
            transport_id: view.transport_id,
            date: view.date,
            prisoner_name: view.prisoner_name,
            prisoner_id: view.prisoner_id,
            pickup: view.pickup,
            destination: view.destination,
            officers: view.officers,
            status: view.status,
            notes: view.notes,
            scheduled_pickup_time: view.scheduled_pickup_time,
            actual_pickup_time: view.actual_pickup_time,
            actual_dropoff_time: view.actual_dropoff_time,
        }
    }
}

/// API response for listing transport jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListScheduleApiResponse {
    /// The transport jobs matching the query.
    schedule: Vec<TransportApiResponse>,
}

/// Time-off payload in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimeOffApiResponse {
    /// The request's identifier.
    time_off_id: i64,
    /// The officer the request belongs to.
    officer_id: i64,
    /// The officer's display name, when still on the roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    officer_name: Option<String>,
    /// Inclusive start date, `YYYY-MM-DD`.
    start: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    end: String,
    /// Free-text reason.
    reason: String,
}

impl TimeOffApiResponse {
    /// Builds the wire payload from the API boundary view.
    fn from_view(view: TimeOffView) -> Self {
        Self {
            time_off_id: view.time_off_id,
            officer_id: view.officer_id,
            officer_name: view.officer_name,
            start: view.start,
            end: view.end,
            reason: view.reason,
        }
    }
}

/// API response for listing time-off requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListTimeOffApiResponse {
    /// The time-off requests.
    time_off: Vec<TimeOffApiResponse>,
}

/// Rotation candidate payload in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RotationCandidateApi {
    /// The officer's identifier.
    officer_id: i64,
    /// The officer's display name.
    name: String,
    /// Last-transport date, absent when never transported.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_transport: Option<String>,
}

impl RotationCandidateApi {
    /// Builds the wire payload from the API boundary view.
    fn from_view(view: RotationCandidateView) -> Self {
        Self {
            officer_id: view.officer_id,
            name: view.name,
            last_transport: view.last_transport,
        }
    }
}

/// API response for a rotation recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RotationAdviceApiResponse {
    /// Short heading for the presentation layer.
    title: String,
    /// Human-readable summary of the recommendation.
    message: String,
    /// First officer in the rotation, if any is eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    primary: Option<RotationCandidateApi>,
    /// Second officer in the rotation, if a second is eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<RotationCandidateApi>,
}

impl RotationAdviceApiResponse {
    /// Builds the wire payload from the API boundary advice.
    fn from_advice(advice: RotationAdvice) -> Self {
        Self {
            title: advice.title,
            message: advice.message,
            primary: advice.primary.map(RotationCandidateApi::from_view),
            secondary: advice.secondary.map(RotationCandidateApi::from_view),
        }
    }
}

/// API response for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// API response for errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Human-readable error message.
    message: String,
}

/// An HTTP-mapped error.
struct HttpError {
    /// The response status code.
    status: StatusCode,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Runs a mutating operation against the shared snapshot.
///
/// The snapshot lock is held for the whole apply → write-through → swap
/// sequence, and the new state is persisted BEFORE the in-memory snapshot is
/// replaced. A failed write leaves the previous snapshot visible.
async fn mutate<F>(app_state: &AppState, op: F) -> Result<Notice, HttpError>
where
    F: FnOnce(&RosterState) -> Result<TransitionResult, ApiError>,
{
    let mut state = app_state.state.lock().await;
    let TransitionResult { new_state, notice } = op(&state)?;

    let mut persistence = app_state.persistence.lock().await;
    persistence.save_state(&new_state)?;
    drop(persistence);

    *state = new_state;
    Ok(notice)
}

/// Wraps a notice as a write response.
fn write_response(notice: Notice) -> Json<WriteResponse> {
    Json(WriteResponse {
        success: true,
        message: Some(notice.message),
    })
}

/// Handler for GET `/officers`.
async fn handle_list_officers(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListOfficersApiResponse> {
    info!("Handling list_officers request");

    let state = app_state.state.lock().await;
    let officers: Vec<OfficerApiResponse> = list_officers(&state)
        .into_iter()
        .map(OfficerApiResponse::from_view)
        .collect();
    drop(state);

    Json(ListOfficersApiResponse { officers })
}

/// Handler for POST `/officers`.
async fn handle_add_officer(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SaveOfficerApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(name = %req.name, "Handling add_officer request");

    let request: SaveOfficerRequest = req.into_request();
    let notice = mutate(&app_state, |state| add_officer(state, &request)).await?;

    Ok(write_response(notice))
}

/// Handler for PUT `/officers/{officer_id}`.
async fn handle_update_officer(
    AxumState(app_state): AxumState<AppState>,
    Path(officer_id): Path<i64>,
    Json(req): Json<SaveOfficerApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(officer_id, "Handling update_officer request");

    let request: SaveOfficerRequest = req.into_request();
    let notice = mutate(&app_state, |state| {
        update_officer(state, officer_id, &request)
    })
    .await?;

    Ok(write_response(notice))
}

/// Handler for DELETE `/officers/{officer_id}`.
async fn handle_delete_officer(
    AxumState(app_state): AxumState<AppState>,
    Path(officer_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(officer_id, "Handling delete_officer request");

    let notice = mutate(&app_state, |state| delete_officer(state, officer_id)).await?;

    Ok(write_response(notice))
}

/// Handler for GET `/schedule`.
async fn handle_list_schedule(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListScheduleQuery>,
) -> Result<Json<ListScheduleApiResponse>, HttpError> {
    info!(status = ?query.status, "Handling list_schedule request");

    let state = app_state.state.lock().await;
    let schedule: Vec<TransportApiResponse> = list_transports(&state, query.status.as_deref())?
        .into_iter()
        .map(TransportApiResponse::from_view)
        .collect();
    drop(state);

    Ok(Json(ListScheduleApiResponse { schedule }))
}

/// Handler for POST `/schedule`.
async fn handle_schedule_transport(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SaveTransportApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(date = %req.date, prisoner = %req.prisoner_name, "Handling schedule_transport request");

    let request: SaveTransportRequest = req.into_request();
    let notice = mutate(&app_state, |state| schedule_transport(state, &request)).await?;

    Ok(write_response(notice))
}

/// Handler for PUT `/schedule/{transport_id}`.
async fn handle_update_transport(
    AxumState(app_state): AxumState<AppState>,
    Path(transport_id): Path<i64>,
    Json(req): Json<SaveTransportApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(transport_id, "Handling update_transport request");

    let request: SaveTransportRequest = req.into_request();
    let notice = mutate(&app_state, |state| {
        update_transport(state, transport_id, &request)
    })
    .await?;

    Ok(write_response(notice))
}

/// Handler for POST `/schedule/{transport_id}/status`.
async fn handle_change_transport_status(
    AxumState(app_state): AxumState<AppState>,
    Path(transport_id): Path<i64>,
    Json(req): Json<ChangeStatusApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(transport_id, status = %req.status, "Handling change_transport_status request");

    let request = ChangeStatusRequest { status: req.status };
    let notice = mutate(&app_state, |state| {
        change_transport_status(state, transport_id, &request)
    })
    .await?;

    Ok(write_response(notice))
}

/// Handler for DELETE `/schedule/{transport_id}`.
async fn handle_delete_transport(
    AxumState(app_state): AxumState<AppState>,
    Path(transport_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(transport_id, "Handling delete_transport request");

    let notice = mutate(&app_state, |state| delete_transport(state, transport_id)).await?;

    Ok(write_response(notice))
}

/// Handler for GET `/time_off`.
async fn handle_list_time_off(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListTimeOffApiResponse> {
    info!("Handling list_time_off request");

    let state = app_state.state.lock().await;
    let time_off: Vec<TimeOffApiResponse> = list_time_off(&state)
        .into_iter()
        .map(TimeOffApiResponse::from_view)
        .collect();
    drop(state);

    Json(ListTimeOffApiResponse { time_off })
}

/// Handler for POST `/time_off`.
async fn handle_add_time_off(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SaveTimeOffApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(officer_id = req.officer_id, "Handling add_time_off request");

    let request: SaveTimeOffRequest = req.into_request();
    let notice = mutate(&app_state, |state| add_time_off(state, &request)).await?;

    Ok(write_response(notice))
}

/// Handler for PUT `/time_off/{time_off_id}`.
async fn handle_update_time_off(
    AxumState(app_state): AxumState<AppState>,
    Path(time_off_id): Path<i64>,
    Json(req): Json<SaveTimeOffApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(time_off_id, "Handling update_time_off request");

    let request: SaveTimeOffRequest = req.into_request();
    let notice = mutate(&app_state, |state| {
        update_time_off(state, time_off_id, &request)
    })
    .await?;

    Ok(write_response(notice))
}

/// Handler for DELETE `/time_off/{time_off_id}`.
async fn handle_delete_time_off(
    AxumState(app_state): AxumState<AppState>,
    Path(time_off_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(time_off_id, "Handling delete_time_off request");

    let notice = mutate(&app_state, |state| delete_time_off(state, time_off_id)).await?;

    Ok(write_response(notice))
}

/// Handler for POST `/rotation/recommend`.
async fn handle_recommend_rotation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecommendRotationApiRequest>,
) -> Result<Json<RotationAdviceApiResponse>, HttpError> {
    info!(target_date = %req.target_date, "Handling recommend_rotation request");

    let request = RecommendRotationRequest {
        target_date: req.target_date,
    };

    let state = app_state.state.lock().await;
    let advice: RotationAdvice = recommend_rotation(&state, &request)?;
    drop(state);

    Ok(Json(RotationAdviceApiResponse::from_advice(advice)))
}

/// Handler for POST `/import/officers`.
///
/// The request body is raw CSV text.
async fn handle_import_officers(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(bytes = body.len(), "Handling import_officers request");

    let notice = mutate(&app_state, |state| import_officers_csv(state, &body)).await?;

    Ok(write_response(notice))
}

/// Handler for POST `/import/schedule`.
///
/// The request body is raw CSV text.
async fn handle_import_schedule(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(bytes = body.len(), "Handling import_schedule request");

    let notice = mutate(&app_state, |state| import_transports_csv(state, &body)).await?;

    Ok(write_response(notice))
}

/// Handler for GET `/export/transports`.
///
/// Returns the transport report as `text/csv`, or 404 when there is nothing
/// to export.
async fn handle_export_transports(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    info!("Handling export_transports request");

    let state = app_state.state.lock().await;
    let report = export_transports_report(&state)?;
    drop(state);

    if report.row_count == 0 {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: String::from("There are no active or completed transports to export."),
        });
    }

    info!(row_count = report.row_count, "Exporting transport report");
    Ok(([(header::CONTENT_TYPE, "text/csv")], report.csv).into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/officers", get(handle_list_officers))
        .route("/officers", post(handle_add_officer))
        .route("/officers/{officer_id}", put(handle_update_officer))
        .route("/officers/{officer_id}", delete(handle_delete_officer))
        .route("/schedule", get(handle_list_schedule))
        .route("/schedule", post(handle_schedule_transport))
        .route("/schedule/{transport_id}", put(handle_update_transport))
        .route(
            "/schedule/{transport_id}",
            delete(handle_delete_transport),
        )
        .route(
            "/schedule/{transport_id}/status",
            post(handle_change_transport_status),
        )
        .route("/time_off", get(handle_list_time_off))
        .route("/time_off", post(handle_add_time_off))
        .route("/time_off/{time_off_id}", put(handle_update_time_off))
        .route("/time_off/{time_off_id}", delete(handle_delete_time_off))
        .route("/rotation/recommend", post(handle_recommend_rotation))
        .route("/import/officers", post(handle_import_officers))
        .route("/import/schedule", post(handle_import_schedule))
        .route("/export/transports", get(handle_export_transports))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Escort Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    // Load the snapshot; a corrupt or missing snapshot falls back to seed
    // data inside the persistence layer.
    let state: RosterState = persistence.load_state();
    info!(
        officers = state.officers.len(),
        transports = state.schedule.len(),
        time_off = state.time_off.len(),
        "Loaded roster state"
    );

    let app_state: AppState = AppState {
        state: Arc::new(Mutex::new(state)),
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
