//! Logged hours store port (outbound).
//!
//! Every method maps to exactly one SQL statement in the Postgres adapter.

use async_trait::async_trait;
use time::PrimitiveDateTime;

use crate::domain::{
    models::{
        EntryId, LoggedHourEntry, LoggedHourSummary, NewLoggedHour, WorkerDirectoryEntry,
        WorkerId,
    },
    LoggedHoursError,
};

/// Outbound port for logged hours persistence.
#[async_trait]
pub trait LoggedHoursStore: Send + Sync + 'static {
    /// All entries of a worker ordered by date ascending.
    async fn entries_for_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError>;

    /// Entries of a worker dated within `[from, until)`, ordered by date ascending.
    async fn entries_between(
        &self,
        worker_id: &WorkerId,
        from: &PrimitiveDateTime,
        until: &PrimitiveDateTime,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError>;

    /// Insert an unapproved entry and return its id.
    async fn insert_entry(&self, entry: &NewLoggedHour) -> Result<EntryId, LoggedHoursError>;

    /// All unapproved entries ordered by date ascending.
    async fn unapproved_entries(&self) -> Result<Vec<LoggedHourSummary>, LoggedHoursError>;

    /// Set the approved flag. Returns the number of rows touched.
    async fn mark_approved(&self, id: EntryId) -> Result<u64, LoggedHoursError>;

    /// Distinct worker id/name pairs ordered by name.
    async fn workers(&self) -> Result<Vec<WorkerDirectoryEntry>, LoggedHoursError>;
}
