use thiserror::Error;

/// Errors that can occur during logged hours operations.
#[derive(Debug, Error)]
pub enum LoggedHoursError {
    #[error("hours must be between 1 and 24, got {0}")]
    HoursOutOfRange(i32),
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("report date is out of range")]
    ReportDateOutOfRange,
    #[error("storage error: {0}")]
    Storage(String),
}

impl LoggedHoursError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
