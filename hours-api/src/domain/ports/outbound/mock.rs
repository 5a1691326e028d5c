//! In-memory store for service tests.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

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

#[derive(Clone, Default)]
pub struct MockLoggedHoursStore {
    entries: Arc<RwLock<Vec<LoggedHourEntry>>>,
    /// When set, every call fails with this storage message.
    failure: Arc<RwLock<Option<String>>>,
}

impl MockLoggedHoursStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        let store = Self::default();
        *store.failure.write().unwrap() = Some(message.to_string());
        store
    }

    pub fn all_entries(&self) -> Vec<LoggedHourEntry> {
        self.entries.read().unwrap().clone()
    }

    fn check(&self) -> Result<(), LoggedHoursError> {
        match self.failure.read().unwrap().as_ref() {
            Some(message) => Err(LoggedHoursError::storage(message.clone())),
            None => Ok(()),
        }
    }

    fn sorted(mut entries: Vec<LoggedHourEntry>) -> Vec<LoggedHourEntry> {
        entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.as_i32().cmp(&b.id.as_i32())));
        entries
    }
}

#[async_trait]
impl LoggedHoursStore for MockLoggedHoursStore {
    async fn entries_for_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError> {
        self.check()?;
        let entries = self.entries.read().unwrap();
        Ok(Self::sorted(
            entries
                .iter()
                .filter(|e| &e.worker_id == worker_id)
                .cloned()
                .collect(),
        ))
    }

    async fn entries_between(
        &self,
        worker_id: &WorkerId,
        from: &PrimitiveDateTime,
        until: &PrimitiveDateTime,
    ) -> Result<Vec<LoggedHourEntry>, LoggedHoursError> {
        self.check()?;
        let entries = self.entries.read().unwrap();
        Ok(Self::sorted(
            entries
                .iter()
                .filter(|e| &e.worker_id == worker_id && &e.date >= from && &e.date < until)
                .cloned()
                .collect(),
        ))
    }

    async fn insert_entry(&self, entry: &NewLoggedHour) -> Result<EntryId, LoggedHoursError> {
        self.check()?;
        let mut entries = self.entries.write().unwrap();
        let id = EntryId::new(entries.len() as i32 + 1);
        entries.push(LoggedHourEntry {
            id,
            worker_id: entry.worker_id.clone(),
            worker_name: entry.worker_name.clone(),
            description: entry.description.clone(),
            hours: entry.hours,
            date: entry.date,
            approved: false,
        });
        Ok(id)
    }

    async fn unapproved_entries(&self) -> Result<Vec<LoggedHourSummary>, LoggedHoursError> {
        self.check()?;
        let entries = self.entries.read().unwrap();
        Ok(Self::sorted(entries.iter().filter(|e| !e.approved).cloned().collect())
            .into_iter()
            .map(LoggedHourSummary::from)
            .collect())
    }

    async fn mark_approved(&self, id: EntryId) -> Result<u64, LoggedHoursError> {
        self.check()?;
        let mut entries = self.entries.write().unwrap();
        let mut touched = 0;
        for entry in entries.iter_mut().filter(|e| e.id == id) {
            entry.approved = true;
            touched += 1;
        }
        Ok(touched)
    }

    async fn workers(&self) -> Result<Vec<WorkerDirectoryEntry>, LoggedHoursError> {
        self.check()?;
        let entries = self.entries.read().unwrap();
        let distinct: BTreeSet<(String, WorkerId)> = entries
            .iter()
            .map(|e| (e.worker_name.clone(), e.worker_id.clone()))
            .collect();
        Ok(distinct
            .into_iter()
            .map(|(worker_name, worker_id)| WorkerDirectoryEntry {
                worker_id,
                worker_name,
            })
            .collect())
    }
}
