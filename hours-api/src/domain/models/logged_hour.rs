use time::PrimitiveDateTime;

use super::{EntryId, WorkerId};
use crate::domain::LoggedHoursError;

pub const MIN_HOURS: i32 = 1;
pub const MAX_HOURS: i32 = 24;

/// A stored logged-hour row.
///
/// Everything except `approved` is fixed at submission time. `worker_name` is
/// the display name the worker had when submitting and is never re-synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedHourEntry {
    pub id: EntryId,
    pub worker_id: WorkerId,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    pub date: PrimitiveDateTime,
    pub approved: bool,
}

/// Report rows carry the full entry.
pub type LoggedHourReportRow = LoggedHourEntry;

/// An entry waiting in the review queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedHourSummary {
    pub id: EntryId,
    pub worker_id: WorkerId,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    pub date: PrimitiveDateTime,
}

impl From<LoggedHourEntry> for LoggedHourSummary {
    fn from(entry: LoggedHourEntry) -> Self {
        Self {
            id: entry.id,
            worker_id: entry.worker_id,
            worker_name: entry.worker_name,
            description: entry.description,
            hours: entry.hours,
            date: entry.date,
        }
    }
}

/// A distinct (worker id, worker name) pair seen in the table.
///
/// A worker who changed their display name between submissions shows up once
/// per name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerDirectoryEntry {
    pub worker_id: WorkerId,
    pub worker_name: String,
}

/// What a worker sends when logging hours.
#[derive(Debug, Clone)]
pub struct HourSubmission {
    pub date: PrimitiveDateTime,
    pub description: String,
    pub hours: i32,
}

/// A validated entry ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoggedHour {
    pub worker_id: WorkerId,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    pub date: PrimitiveDateTime,
}

impl NewLoggedHour {
    pub fn new(
        worker_id: WorkerId,
        worker_name: impl Into<String>,
        submission: HourSubmission,
    ) -> Result<Self, LoggedHoursError> {
        if !(MIN_HOURS..=MAX_HOURS).contains(&submission.hours) {
            return Err(LoggedHoursError::HoursOutOfRange(submission.hours));
        }

        if submission.description.trim().is_empty() {
            return Err(LoggedHoursError::EmptyDescription);
        }

        Ok(Self {
            worker_id,
            worker_name: worker_name.into(),
            description: submission.description,
            hours: submission.hours,
            date: submission.date,
        })
    }
}
