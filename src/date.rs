//! Date-like parameter values and their canonical wire forms.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Wire precision of a date parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// `YYYY-MM-DD`
    Day,
    /// `YYYY-MM-DDThh:mm:ss`
    Second,
    /// `YYYY`
    Year,
}

impl Granularity {
    pub fn format_str(self) -> &'static str {
        match self {
            Granularity::Day => "%Y-%m-%d",
            Granularity::Second => "%Y-%m-%dT%H:%M:%S",
            Granularity::Year => "%Y",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Granularity::Day => "YYYY-MM-DD",
            Granularity::Second => "YYYY-MM-DD or YYYY-MM-DDThh:mm:ss",
            Granularity::Year => "YYYY",
        }
    }
}

/// A value accepted by date parameters.
///
/// Text is sent as given; the remote service is the judge of its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Now,
}

impl DateLike {
    /// Structured values as a point in time, for ordering checks.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            DateLike::Date(d) => d.and_hms_opt(0, 0, 0),
            DateLike::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Render to the canonical wire string.
    ///
    /// `Now` stays the literal `now` when the parameter accepts it, otherwise it
    /// resolves to the current UTC time.
    pub fn normalize(&self, granularity: Granularity, accepts_now: bool) -> String {
        match self {
            DateLike::Text(s) => s.clone(),
            DateLike::Date(d) => match granularity {
                Granularity::Second => d
                    .and_hms_opt(0, 0, 0)
                    .map(|dt| dt.format(granularity.format_str()).to_string())
                    .unwrap_or_else(|| d.format("%Y-%m-%d").to_string()),
                _ => d.format(granularity.format_str()).to_string(),
            },
            DateLike::DateTime(dt) => dt.format(granularity.format_str()).to_string(),
            DateLike::Now if accepts_now => "now".to_string(),
            DateLike::Now => Utc::now()
                .naive_utc()
                .format(granularity.format_str())
                .to_string(),
        }
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_string())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        DateLike::Text(s)
    }
}

impl From<NaiveDate> for DateLike {
    fn from(d: NaiveDate) -> Self {
        DateLike::Date(d)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(dt: NaiveDateTime) -> Self {
        DateLike::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateLike {
    fn from(dt: DateTime<Tz>) -> Self {
        DateLike::DateTime(dt.naive_local())
    }
}
