// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use chrono::NaiveDate;

use crate::Event;
use crate::filter::sort_events;

/// Hours shown by the day view when nothing else is configured: 05:00 to 20:00.
pub const DEFAULT_DAY_HOURS: Range<u32> = 5..21;

/// One hour row of the day view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    hour: u32,
    events: Vec<Event>,
}

impl HourSlot {
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Label of the slot, e.g. `07:00`.
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }

    /// Events running during this hour.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Lays out the events of `date` on hourly slots.
///
/// An event occupies slot `h` when it starts at or before `h` and ends after `h`, comparing
/// whole hours only. Events with malformed times are left out.
pub fn day_schedule(events: &[Event], date: NaiveDate, hours: Range<u32>) -> Vec<HourSlot> {
    let mut day: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();
    day.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    hours
        .map(|hour| {
            let mut running: Vec<Event> = day
                .iter()
                .filter(|e| match (e.start_hour(), e.end_hour()) {
                    (Some(start), Some(end)) => start <= hour && hour < end,
                    _ => false,
                })
                .map(|e| (*e).clone())
                .collect();
            sort_events(&mut running);
            HourSlot {
                hour,
                events: running,
            }
        })
        .collect()
}
