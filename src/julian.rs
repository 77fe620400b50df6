//! Julian and modified Julian dates. Pure computation, no network.

use crate::error::{Result, ValueError};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// JD of 0000-12-31T00:00 (proleptic Gregorian), the day before
/// `num_days_from_ce` starts counting at 1.
const JD_CE_EPOCH: f64 = 1_721_424.5;

/// Offset between the Julian and modified Julian day counts.
pub const MJD_OFFSET: f64 = 2_400_000.5;

pub fn julian_date(dt: NaiveDateTime, modified: bool) -> f64 {
    let day = f64::from(dt.date().num_days_from_ce()) + JD_CE_EPOCH;
    let secs = f64::from(dt.time().num_seconds_from_midnight())
        + f64::from(dt.time().nanosecond()) / 1e9;
    let jd = day + secs / 86_400.0;
    if modified {
        jd - MJD_OFFSET
    } else {
        jd
    }
}

/// Julian date from calendar fields; impossible dates or times are a value error.
pub fn julian_date_ymd(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    modified: bool,
) -> Result<f64> {
    let dt = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| ValueError::InvalidDate {
            value: format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"),
        })?;
    Ok(julian_date(dt, modified))
}

pub fn julian_date_now(modified: bool) -> f64 {
    julian_date(Utc::now().naive_utc(), modified)
}
