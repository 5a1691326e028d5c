//! Wire format for entry dates.
//!
//! Dates are stored without a time zone. On output they are written as
//! `YYYY-MM-DDTHH:MM:SS`; on input a bare date, a local date-time (with or
//! without seconds and fractions) or an RFC 3339 timestamp is accepted.
//! Timestamps carrying an offset are normalized to UTC.

use serde::{Deserialize, Deserializer, Serializer};
use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
};

const OUTPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const LOCAL_FORMATS: [&[BorrowedFormatItem<'static>]; 3] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_datetime(input: &str) -> Result<PrimitiveDateTime, String> {
    let input = input.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(input, &Rfc3339) {
        let utc = timestamp.to_offset(UtcOffset::UTC);
        return Ok(PrimitiveDateTime::new(utc.date(), utc.time()));
    }

    for format in LOCAL_FORMATS {
        if let Ok(datetime) = PrimitiveDateTime::parse(input, format) {
            return Ok(datetime);
        }
    }

    Date::parse(input, DATE_ONLY)
        .map(Date::midnight)
        .map_err(|_| format!("could not parse date: {input}"))
}

pub fn format_datetime(datetime: &PrimitiveDateTime) -> Result<String, time::error::Format> {
    datetime.format(OUTPUT)
}

pub fn serialize<S>(datetime: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = format_datetime(datetime).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}
