//! HTTP response types for the logged hours endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;
use time::PrimitiveDateTime;

use crate::domain::models::{datetime, LoggedHourEntry, LoggedHourSummary, WorkerDirectoryEntry};

/// A full entry, used for the caller's own hours and for report rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedHourResponse {
    pub id: i32,
    pub worker_id: String,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    #[serde(with = "datetime")]
    pub date: PrimitiveDateTime,
    pub approved: bool,
}

impl From<LoggedHourEntry> for LoggedHourResponse {
    fn from(entry: LoggedHourEntry) -> Self {
        Self {
            id: entry.id.as_i32(),
            worker_id: entry.worker_id.to_string(),
            worker_name: entry.worker_name,
            description: entry.description,
            hours: entry.hours,
            date: entry.date,
            approved: entry.approved,
        }
    }
}

/// An entry in the review queue.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InReviewResponse {
    pub id: i32,
    pub worker_id: String,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    #[serde(with = "datetime")]
    pub date: PrimitiveDateTime,
}

impl From<LoggedHourSummary> for InReviewResponse {
    fn from(summary: LoggedHourSummary) -> Self {
        Self {
            id: summary.id.as_i32(),
            worker_id: summary.worker_id.to_string(),
            worker_name: summary.worker_name,
            description: summary.description,
            hours: summary.hours,
            date: summary.date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerResponse {
    pub worker_id: String,
    pub worker_name: String,
}

impl From<WorkerDirectoryEntry> for WorkerResponse {
    fn from(worker: WorkerDirectoryEntry) -> Self {
        Self {
            worker_id: worker.worker_id.to_string(),
            worker_name: worker.worker_name,
        }
    }
}
