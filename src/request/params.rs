use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::foundation::error::{ChronosError, ChronosResult};
use crate::request::model::{
    CalendarDevice, CalendarRequest, CompletedDays, ProgressDevice, ProgressRequest, Shape,
    validate_year,
};
use crate::style::theme::Theme;

/// Decoded query string, one value per key.
pub type QueryParams = BTreeMap<String, String>;

fn lookup<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(params: &QueryParams, key: &str, default: T) -> ChronosResult<T>
where
    T: FromStr<Err = ChronosError>,
{
    lookup(params, key).map_or(Ok(default), str::parse)
}

fn parse_year(raw: &str) -> ChronosResult<i32> {
    let year = raw.parse::<i32>().map_err(|_| {
        ChronosError::invalid_parameter(format!("invalid year \"{raw}\"; expected an integer"))
    })?;
    validate_year(year)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> ChronosResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ChronosError::invalid_parameter(format!("invalid date \"{raw}\"; expected YYYY-MM-DD"))
    })
}

/// Move `date` into `year`, clamping Feb 29 to Feb 28 in common years.
pub fn with_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// IANA zone name passed as `timezone`, if any.
pub fn requested_timezone(params: &QueryParams) -> Option<&str> {
    lookup(params, "timezone")
}

/// Calendar date of `now` in the IANA zone `zone`.
///
/// A missing or unknown zone yields `server_today`.
pub fn today_in(zone: Option<&str>, now: DateTime<Utc>, server_today: NaiveDate) -> NaiveDate {
    let Some(name) = zone else {
        return server_today;
    };
    match name.trim().parse::<Tz>() {
        Ok(tz) => now.with_timezone(&tz).date_naive(),
        Err(_) => {
            tracing::warn!(timezone = name, "unknown timezone; using server date");
            server_today
        }
    }
}

/// Build a month-calendar request from `year`, `device`, `completed` and `shape`.
///
/// `year` defaults to the year of `today`.
pub fn calendar_request(params: &QueryParams, today: NaiveDate) -> ChronosResult<CalendarRequest> {
    let year = match lookup(params, "year") {
        Some(raw) => parse_year(raw)?,
        None => today.year(),
    };
    let device = parse_or(params, "device", CalendarDevice::default())?;
    let shape = parse_or(params, "shape", Shape::Circle)?;
    let completed = lookup(params, "completed")
        .map(CompletedDays::parse_list)
        .unwrap_or_default();

    CalendarRequest::new(year, device, completed, shape)
}

/// Build a year-progress request from `date`, `year`, `device`, `theme` and `shape`.
///
/// When `fixed_device` is set the `device` parameter is ignored (device-specific endpoints).
/// `date` defaults to `today`; a `year` without a `date` moves today into that year.
pub fn progress_request(
    params: &QueryParams,
    today: NaiveDate,
    fixed_device: Option<ProgressDevice>,
) -> ChronosResult<ProgressRequest> {
    let date = match (lookup(params, "date"), lookup(params, "year")) {
        (Some(raw), _) => parse_date(raw)?,
        (None, Some(raw)) => with_year(today, parse_year(raw)?),
        (None, None) => today,
    };
    let device = match fixed_device {
        Some(d) => d,
        None => parse_or(params, "device", ProgressDevice::default())?,
    };
    let theme = parse_or(params, "theme", Theme::default())?;
    let shape = parse_or(params, "shape", device.default_shape())?;

    ProgressRequest::new(date, device, theme, shape)
}

#[cfg(test)]
#[path = "../../tests/unit/request/params.rs"]
mod tests;
