use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{
        EntryId, HourSubmission, LoggedHourEntry, LoggedHourReportRow, LoggedHourSummary,
        NewLoggedHour, ReportRequest, ReportWindow, WorkerDirectoryEntry, WorkerId,
    },
    ports::{inbound::LoggedHoursService, outbound::LoggedHoursStore},
    LoggedHoursError,
};

/// Implementation of the LoggedHoursService inbound port.
///
/// Validates submissions and resolves report windows; everything else is a
/// straight pass-through to the store.
pub struct LoggedHoursServiceImpl<S> {
    store: Arc<S>,
}

impl<S> LoggedHoursServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: LoggedHoursStore> LoggedHoursService for LoggedHoursServiceImpl<S> {
    async fn list_own_hours(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError> {
        self.store.entries_for_worker(worker_id).await
    }

    async fn submit_entry(
        &self,
        worker_id: &WorkerId,
        worker_name: &str,
        submission: HourSubmission,
    ) -> Result<EntryId, LoggedHoursError> {
        let entry = NewLoggedHour::new(worker_id.clone(), worker_name, submission)?;
        let id = self.store.insert_entry(&entry).await?;

        tracing::info!(%worker_id, entry_id = %id, hours = entry.hours, "Logged hours");
        Ok(id)
    }

    async fn list_unreviewed(&self) -> Result<Vec<LoggedHourSummary>, LoggedHoursError> {
        self.store.unapproved_entries().await
    }

    async fn mark_reviewed(&self, id: EntryId) -> Result<(), LoggedHoursError> {
        let touched = self.store.mark_approved(id).await?;
        if touched == 0 {
            tracing::debug!(entry_id = %id, "Mark reviewed matched no entry");
        }
        Ok(())
    }

    async fn generate_report(
        &self,
        request: &ReportRequest,
    ) -> Result<Vec<LoggedHourReportRow>, LoggedHoursError> {
        match request.window()? {
            ReportWindow::Range { from, until } => {
                self.store
                    .entries_between(&request.worker_id, &from, &until)
                    .await
            }
            // ISO weeks are matched here rather than in SQL so the week
            // numbering does not depend on the store's date settings.
            window @ ReportWindow::Week(_) => {
                let mut entries = self.store.entries_for_worker(&request.worker_id).await?;
                entries.retain(|entry| window.contains(entry.date));
                Ok(entries)
            }
        }
    }

    async fn list_workers(&self) -> Result<Vec<WorkerDirectoryEntry>, LoggedHoursError> {
        self.store.workers().await
    }
}
