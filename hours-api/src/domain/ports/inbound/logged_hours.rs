use async_trait::async_trait;

use crate::domain::{
    models::{
        EntryId, HourSubmission, LoggedHourEntry, LoggedHourReportRow, LoggedHourSummary,
        ReportRequest, WorkerDirectoryEntry, WorkerId,
    },
    LoggedHoursError,
};

/// Inbound port for the logged hours use cases.
///
/// HTTP handlers call straight into this trait, one method per route.
#[async_trait]
pub trait LoggedHoursService: Send + Sync + 'static {
    /// All entries submitted by a worker, oldest first.
    async fn list_own_hours(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError>;

    /// Validate and store a new, unapproved entry for the calling worker.
    ///
    /// Returns the id the store assigned.
    async fn submit_entry(
        &self,
        worker_id: &WorkerId,
        worker_name: &str,
        submission: HourSubmission,
    ) -> Result<EntryId, LoggedHoursError>;

    /// The global review queue: every unapproved entry, oldest first.
    async fn list_unreviewed(&self) -> Result<Vec<LoggedHourSummary>, LoggedHoursError>;

    /// Approve an entry. Unknown ids and already approved entries are no-ops.
    async fn mark_reviewed(&self, id: EntryId) -> Result<(), LoggedHoursError>;

    /// A worker's entries for the day, ISO week or month around a date.
    async fn generate_report(
        &self,
        request: &ReportRequest,
    ) -> Result<Vec<LoggedHourReportRow>, LoggedHoursError>;

    /// Distinct (worker id, worker name) pairs, ordered by name.
    async fn list_workers(&self) -> Result<Vec<WorkerDirectoryEntry>, LoggedHoursError>;
}
