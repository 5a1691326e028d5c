//! PostgreSQL implementation of the LoggedHoursStore port.

use std::sync::Arc;

use async_trait::async_trait;
use time::PrimitiveDateTime;

use crate::domain::{
    models::{
        EntryId, LoggedHourEntry, LoggedHourSummary, NewLoggedHour, WorkerDirectoryEntry,
        WorkerId,
    },
    ports::outbound::LoggedHoursStore,
    LoggedHoursError,
};
use crate::repositories::{
    DatabaseLoggedHour, DatabaseWorker, LoggedHoursRepository, LoggedHoursRepositoryImpl,
    NewDatabaseLoggedHour, RepositoryError,
};

/// Adapter that implements LoggedHoursStore using PostgreSQL.
pub struct PostgresLoggedHoursAdapter<R = LoggedHoursRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> PostgresLoggedHoursAdapter<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn storage_error(err: RepositoryError) -> LoggedHoursError {
    tracing::error!("Logged hours query failed: {:?}", err);
    LoggedHoursError::storage(err.to_string())
}

#[async_trait]
impl<R: LoggedHoursRepository + Send + Sync + 'static> LoggedHoursStore
    for PostgresLoggedHoursAdapter<R>
{
    async fn entries_for_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError> {
        let rows = self
            .repo
            .get_by_user(worker_id.as_str())
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(db_row_to_entry).collect())
    }

    async fn entries_between(
        &self,
        worker_id: &WorkerId,
        from: &PrimitiveDateTime,
        until: &PrimitiveDateTime,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError> {
        let rows = self
            .repo
            .get_by_user_between(worker_id.as_str(), from, until)
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(db_row_to_entry).collect())
    }

    async fn insert_entry(&self, entry: &NewLoggedHour) -> Result<EntryId, LoggedHoursError> {
        let row = NewDatabaseLoggedHour {
            user_id: entry.worker_id.to_string(),
            user_name: entry.worker_name.clone(),
            description: entry.description.clone(),
            hours: entry.hours,
            date: entry.date,
        };

        let id = self.repo.create(&row).await.map_err(storage_error)?;

        Ok(EntryId::new(id))
    }

    async fn unapproved_entries(&self) -> Result<Vec<LoggedHourSummary>, LoggedHoursError> {
        let rows = self.repo.get_unapproved().await.map_err(storage_error)?;

        Ok(rows
            .into_iter()
            .map(|row| LoggedHourSummary::from(db_row_to_entry(row)))
            .collect())
    }

    async fn mark_approved(&self, id: EntryId) -> Result<u64, LoggedHoursError> {
        self.repo.approve(id.as_i32()).await.map_err(storage_error)
    }

    async fn workers(&self) -> Result<Vec<WorkerDirectoryEntry>, LoggedHoursError> {
        let workers = self.repo.distinct_users().await.map_err(storage_error)?;

        Ok(workers.into_iter().map(db_worker_to_domain).collect())
    }
}

fn db_row_to_entry(row: DatabaseLoggedHour) -> LoggedHourEntry {
    LoggedHourEntry {
        id: EntryId::new(row.id),
        worker_id: WorkerId::new(row.user_id),
        worker_name: row.user_name,
        description: row.description,
        hours: row.hours,
        date: row.date,
        approved: row.approved,
    }
}

fn db_worker_to_domain(worker: DatabaseWorker) -> WorkerDirectoryEntry {
    WorkerDirectoryEntry {
        worker_id: WorkerId::new(worker.user_id),
        worker_name: worker.user_name,
    }
}
