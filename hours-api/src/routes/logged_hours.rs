use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use time::PrimitiveDateTime;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{InReviewResponse, LoggedHourResponse, WorkerResponse},
    app_state::AppState,
    auth::AuthUser,
    domain::models::{datetime, EntryId, FilterType, HourSubmission, ReportRequest},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_own_hours).post(submit_hours))
        .route("/in-review", get(list_in_review).post(mark_reviewed))
        .route("/report", post(generate_report))
        .route("/workers", get(list_workers))
}

// ============================================================================
// Own hours
// ============================================================================

#[instrument(name = "list_own_hours", skip(app_state))]
async fn list_own_hours(
    user: AuthUser,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<LoggedHourResponse>>, ApiError> {
    let entries = app_state
        .logged_hours_service
        .list_own_hours(&user.worker_id)
        .await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitHoursPayload {
    #[serde(with = "datetime")]
    date: PrimitiveDateTime,
    description: String,
    hours: i32,
}

#[instrument(name = "submit_hours", skip(app_state))]
async fn submit_hours(
    user: AuthUser,
    State(app_state): State<AppState>,
    Json(body): Json<SubmitHoursPayload>,
) -> Result<StatusCode, ApiError> {
    let submission = HourSubmission {
        date: body.date,
        description: body.description,
        hours: body.hours,
    };

    app_state
        .logged_hours_service
        .submit_entry(&user.worker_id, &user.worker_name, submission)
        .await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Review queue
// ============================================================================

#[instrument(name = "list_in_review", skip(app_state))]
async fn list_in_review(
    _user: AuthUser,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<InReviewResponse>>, ApiError> {
    let entries = app_state.logged_hours_service.list_unreviewed().await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct MarkReviewedPayload {
    id: i32,
}

#[instrument(name = "mark_reviewed", skip(app_state))]
async fn mark_reviewed(
    _user: AuthUser,
    State(app_state): State<AppState>,
    Json(body): Json<MarkReviewedPayload>,
) -> Result<StatusCode, ApiError> {
    app_state
        .logged_hours_service
        .mark_reviewed(EntryId::new(body.id))
        .await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Reporting
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    worker_id: String,
    filter_type: FilterType,
    #[serde(with = "datetime")]
    date_filter: PrimitiveDateTime,
}

#[instrument(name = "generate_report", skip(app_state))]
async fn generate_report(
    _user: AuthUser,
    State(app_state): State<AppState>,
    Json(body): Json<ReportPayload>,
) -> Result<Json<Vec<LoggedHourResponse>>, ApiError> {
    let request = ReportRequest::new(body.worker_id, body.filter_type, body.date_filter);

    let rows = app_state
        .logged_hours_service
        .generate_report(&request)
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(name = "list_workers", skip(app_state))]
async fn list_workers(
    _user: AuthUser,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<WorkerResponse>>, ApiError> {
    let workers = app_state.logged_hours_service.list_workers().await?;

    Ok(Json(workers.into_iter().map(Into::into).collect()))
}
