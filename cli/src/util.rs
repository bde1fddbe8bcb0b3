// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parse a date given on the command line, relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`, `tomorrow`, `yesterday` and signed day offsets such as
/// `+3` or `-1`.
pub fn parse_date(today: NaiveDate, value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    match value.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return shift(today, 1),
        "yesterday" => return shift(today, -1),
        _ => {}
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if value.starts_with(['+', '-'])
        && let Ok(offset) = value.parse::<i64>()
    {
        return shift(today, offset);
    }

    Err(format!(
        "Invalid date {value:?}. Expected YYYY-MM-DD, today, tomorrow, yesterday or +N/-N days"
    ))
}

fn shift(date: NaiveDate, offset: i64) -> Result<NaiveDate, String> {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    };
    shifted.ok_or_else(|| format!("Date out of range: {date} {offset:+} days"))
}
