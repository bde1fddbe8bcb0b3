// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar-date arithmetic shared by the grid, the week range and the filters.
//!
//! Every helper builds new [`NaiveDate`] values; nothing is adjusted in place.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};

/// NOTE: Used for storing events on disk, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
const STABLE_FORMAT_FLOATING: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Short weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// `date` moved forward by `days`, clamped to [`NaiveDate::MAX`].
pub(crate) fn forward_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// `date` moved back by `days`, clamped to [`NaiveDate::MIN`].
pub(crate) fn back_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

/// The Sunday on or before `date`, or [`NaiveDate::MIN`] when that Sunday is not
/// representable.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    back_days(date, u64::from(offset))
}

/// The seven days, Sunday through Saturday, of the week containing `date`.
///
/// In the first and last weeks of the supported range the days that cannot be represented
/// are clamped to [`NaiveDate::MIN`] or [`NaiveDate::MAX`], so the result may repeat a date.
pub fn week_range(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = start_of_week(date);
    std::array::from_fn(|i| forward_days(sunday, i as u64))
}

/// Whether `date` falls in the Sunday-to-Saturday week containing `anchor`.
pub fn same_week(date: NaiveDate, anchor: NaiveDate) -> bool {
    let sunday = start_of_week(anchor);
    let saturday = forward_days(sunday, 6);
    sunday <= date && date <= saturday
}

/// Whether both dates share year and month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The first day of the given month. Month numbers outside `1..=12` roll over into the
/// neighbouring years, so `(2024, 13)` is January 2025 and `(2024, 0)` is December 2023.
///
/// Returns `None` only when the year is outside the range supported by [`NaiveDate`].
pub fn first_of_month(year: i32, month: i32) -> Option<NaiveDate> {
    let index = month - 1;
    let year = year.checked_add(index.div_euclid(12))?;
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt().map_or(31, |last| last.day()),
        None => 31, // December of the last representable year
    }
}

/// Shift the month containing `date` by `delta` months, pinned to its first day.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let first = month_start(date);
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    }
}

/// Human readable month label, e.g. `May 2024`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Human readable date, e.g. `May 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Weekday heading with the date, e.g. `Wed, May 15`.
pub fn format_day_heading(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!("{weekday}, {}", date.format("%B %-d"))
}

/// Parse a stored date.
///
/// Accepts `YYYY-MM-DD`, a floating `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps.
/// Timestamps with an offset are converted to the local calendar date.
pub fn parse_stored_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, STABLE_FORMAT_DATEONLY) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, STABLE_FORMAT_FLOATING) {
        return Some(dt.date());
    }
    None
}

/// Parse a zero-padded 24-hour `HH:MM` string into `(hour, minute)`.
pub fn parse_clock(value: &str) -> Option<(u32, u32)> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let (h, m) = value.split_once(':')?;
    if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Format a `HH:MM` string on a 12-hour clock, e.g. `14:05` becomes `2:05 PM`.
/// Malformed input is returned unchanged.
pub fn format_time_12h(value: &str) -> String {
    match parse_clock(value) {
        Some((hour, minute)) => {
            let period = if hour >= 12 { "PM" } else { "AM" };
            let hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour}:{minute:02} {period}")
        }
        None => value.to_string(),
    }
}
