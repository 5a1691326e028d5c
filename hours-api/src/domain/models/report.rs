use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString};
use time::{Date, Duration, PrimitiveDateTime};

use super::WorkerId;
use crate::domain::LoggedHoursError;

/// Report granularity.
///
/// On the wire this is either the numeric code (1 = day, 2 = week, 3 = month)
/// or the variant name, with or without a `Filter` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "FilterTypeRepr")]
pub enum FilterType {
    #[strum(to_string = "Day", serialize = "DayFilter")]
    Day = 1,
    #[strum(to_string = "Week", serialize = "WeekFilter")]
    Week = 2,
    #[strum(to_string = "Month", serialize = "MonthFilter")]
    Month = 3,
}

impl FilterType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Day),
            2 => Some(Self::Week),
            3 => Some(Self::Month),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FilterTypeRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<FilterTypeRepr> for FilterType {
    type Error = String;

    fn try_from(repr: FilterTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            FilterTypeRepr::Code(code) => {
                Self::from_code(code).ok_or_else(|| format!("unknown filter type: {code}"))
            }
            FilterTypeRepr::Name(name) => {
                Self::from_str(&name).map_err(|_| format!("unknown filter type: {name}"))
            }
        }
    }
}

/// An ISO-8601 week number: weeks run Monday to Sunday and week 1 holds the
/// year's first Thursday.
///
/// Only the number is compared, so week 1 of 2022 and week 1 of 2023 are the
/// same week here. Days around new year take the number of the week they fall
/// in (2022-12-31 is week 52, 2024-12-30 is week 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoWeek(pub u8);

impl IsoWeek {
    pub fn of(date: Date) -> Self {
        Self(date.iso_week())
    }

    pub fn contains(&self, date: Date) -> bool {
        Self::of(date) == *self
    }
}

/// The slice of a worker's history a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportWindow {
    /// Half-open range `[from, until)`, resolved by the store.
    Range {
        from: PrimitiveDateTime,
        until: PrimitiveDateTime,
    },
    /// Resolved in application code over the full history.
    Week(IsoWeek),
}

impl ReportWindow {
    pub fn contains(&self, datetime: PrimitiveDateTime) -> bool {
        match self {
            Self::Range { from, until } => *from <= datetime && datetime < *until,
            Self::Week(week) => week.contains(datetime.date()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub worker_id: WorkerId,
    pub filter_type: FilterType,
    pub reference: PrimitiveDateTime,
}

impl ReportRequest {
    pub fn new(
        worker_id: impl Into<WorkerId>,
        filter_type: FilterType,
        reference: PrimitiveDateTime,
    ) -> Self {
        Self {
            worker_id: worker_id.into(),
            filter_type,
            reference,
        }
    }

    pub fn window(&self) -> Result<ReportWindow, LoggedHoursError> {
        let day = self.reference.date();

        match self.filter_type {
            FilterType::Day => {
                let next = day
                    .next_day()
                    .ok_or(LoggedHoursError::ReportDateOutOfRange)?;
                Ok(ReportWindow::Range {
                    from: day.midnight(),
                    until: next.midnight(),
                })
            }
            FilterType::Week => Ok(ReportWindow::Week(IsoWeek::of(day))),
            FilterType::Month => {
                let first = day - Duration::days(i64::from(day.day()) - 1);
                // 32 days past the 1st always lands in the following month.
                let probe = first
                    .checked_add(Duration::days(32))
                    .ok_or(LoggedHoursError::ReportDateOutOfRange)?;
                let next_first = probe - Duration::days(i64::from(probe.day()) - 1);
                Ok(ReportWindow::Range {
                    from: first.midnight(),
                    until: next_first.midnight(),
                })
            }
        }
    }
}
