// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::Event;
use crate::datetime::{STABLE_FORMAT_DATEONLY, month_label};

/// Events bucketed by month, then by date.
///
/// Buckets keep the order in which they were first met in the input, at both levels. With
/// input sorted by the filter pipeline this is chronological order; the keys themselves are
/// never sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Agenda {
    months: Vec<MonthGroup>,
    index: HashMap<String, usize>,
}

/// All events of one month label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    label: String,
    days: Vec<DayGroup>,
    index: HashMap<NaiveDate, usize>,
}

/// All events of one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    date: NaiveDate,
    events: Vec<Event>,
}

impl Agenda {
    /// Month groups in first-encounter order.
    pub fn months(&self) -> &[MonthGroup] {
        &self.months
    }

    /// Looks up a month group by its label, e.g. `May 2024`.
    pub fn get(&self, label: &str) -> Option<&MonthGroup> {
        self.index.get(label).map(|&i| &self.months[i])
    }

    /// Number of month groups.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total number of events across all groups.
    pub fn event_count(&self) -> usize {
        self.months.iter().map(MonthGroup::event_count).sum()
    }

    fn push(&mut self, event: Event) {
        let label = month_label(event.date);
        let i = match self.index.get(&label) {
            Some(&i) => i,
            None => {
                self.months.push(MonthGroup {
                    label: label.clone(),
                    days: Vec::new(),
                    index: HashMap::new(),
                });
                self.index.insert(label, self.months.len() - 1);
                self.months.len() - 1
            }
        };
        self.months[i].push(event);
    }
}

impl MonthGroup {
    /// Label such as `May 2024`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Day groups in first-encounter order.
    pub fn days(&self) -> &[DayGroup] {
        &self.days
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayGroup> {
        self.index.get(&date).map(|&i| &self.days[i])
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }

    fn push(&mut self, event: Event) {
        let i = match self.index.get(&event.date) {
            Some(&i) => i,
            None => {
                self.days.push(DayGroup {
                    date: event.date,
                    events: Vec::new(),
                });
                self.index.insert(event.date, self.days.len() - 1);
                self.days.len() - 1
            }
        };
        self.days[i].events.push(event);
    }
}

impl DayGroup {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Stable key of the date, `YYYY-MM-DD`.
    pub fn key(&self) -> String {
        self.date.format(STABLE_FORMAT_DATEONLY).to_string()
    }

    /// Events of the day, in input order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

/// Groups events for the agenda view. The input is expected to be sorted already.
pub fn group_agenda<I>(events: I) -> Agenda
where
    I: IntoIterator<Item = Event>,
{
    let mut agenda = Agenda::default();
    for event in events {
        agenda.push(event);
    }
    agenda
}
