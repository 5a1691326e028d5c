use serde::{Deserialize, Serialize, Serializer};
use time::PrimitiveDateTime;

time::serde::format_description!(
    wire_datetime,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedHourEntry {
    pub id: i32,
    pub worker_id: String,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    #[serde(with = "wire_datetime")]
    pub date: PrimitiveDateTime,
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InReviewEntry {
    pub id: i32,
    pub worker_id: String,
    pub worker_name: String,
    pub description: String,
    pub hours: i32,
    #[serde(with = "wire_datetime")]
    pub date: PrimitiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerEntry {
    pub worker_id: String,
    pub worker_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub db_healthy: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitHoursRequest {
    #[serde(with = "wire_datetime")]
    pub date: PrimitiveDateTime,
    pub description: String,
    pub hours: i32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkReviewedRequest {
    pub id: i32,
}

/// Report granularity. Sent as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Day = 1,
    Week = 2,
    Month = 3,
}

impl Serialize for FilterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub worker_id: String,
    pub filter_type: FilterType,
    #[serde(with = "wire_datetime")]
    pub date_filter: PrimitiveDateTime,
}
