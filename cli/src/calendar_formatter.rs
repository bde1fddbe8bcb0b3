// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;
use farmcal_core::datetime::{WEEKDAY_NAMES, format_date, format_day_heading};
use farmcal_core::{
    Agenda, CalendarView, Event, FarmCalendar, HourSlot, MonthGrid, count_on, events_on,
};

use crate::event_formatter::{EventColumn, EventFormatter, hex_color};
use crate::table::{PaddingDirection, pad};

/// Markers shown per day cell at most.
const MAX_MARKERS: usize = 3;

/// Width of a month grid cell: two digits, a space and the markers.
const CELL_WIDTH: usize = 2 + 1 + MAX_MARKERS;

/// Renders the active view of a calendar as text.
#[derive(Debug, Clone, Copy)]
pub struct CalendarFormatter {
    today: NaiveDate,
    verbose: bool,
}

impl CalendarFormatter {
    pub fn new(today: NaiveDate, verbose: bool) -> Self {
        Self { today, verbose }
    }

    pub fn format(&self, calendar: &FarmCalendar) -> String {
        let mut out = String::new();
        match calendar.current_view() {
            CalendarView::Month { grid, events } => {
                let selected = calendar.view().selected_date();
                self.write_month(&mut out, &grid, calendar.events(), selected);
                out.push('\n');
                self.write_events(&mut out, &events, EventColumn::list(self.verbose));
            }
            CalendarView::Week { days, events } => self.write_week(&mut out, &days, &events),
            CalendarView::Day {
                date,
                events,
                slots,
            } => self.write_day(&mut out, date, &events, &slots),
            CalendarView::Agenda(agenda) => self.write_agenda(&mut out, &agenda),
        }
        out
    }

    fn write_month(&self, out: &mut String, grid: &MonthGrid, all: &[Event], selected: NaiveDate) {
        let _ = writeln!(out, "{}", grid.label().bold());

        let header: Vec<String> = WEEKDAY_NAMES
            .iter()
            .map(|name| pad(name, CELL_WIDTH, PaddingDirection::Left))
            .collect();
        let _ = writeln!(out, "{}", header.join(" ").trim_end().dimmed());

        for row in grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| {
                    let date = cell.date();
                    let day = format!("{:>2}", cell.day());
                    let day = if !cell.is_current_month() {
                        day.dimmed().to_string()
                    } else if date == self.today {
                        day.bold().underline().to_string()
                    } else if date == selected {
                        day.reversed().to_string()
                    } else {
                        day
                    };
                    // markers take the whole collection into account, not the filters
                    let markers = markers(&events_on(all, date));
                    let width = count_on(all, date).min(MAX_MARKERS);
                    format!("{day} {markers}{}", " ".repeat(MAX_MARKERS - width))
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(" ").trim_end());
        }
    }

    fn write_week(&self, out: &mut String, days: &[NaiveDate; 7], events: &[Event]) {
        for (i, &date) in days.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", self.heading(date));

            let day: Vec<Event> = events.iter().filter(|e| e.date == date).cloned().collect();
            if day.is_empty() {
                let _ = writeln!(out, "  {}", "No events".italic());
            } else {
                self.write_events(out, &day, EventColumn::within_day(self.verbose));
            }
        }
    }

    fn write_day(&self, out: &mut String, date: NaiveDate, events: &[Event], slots: &[HourSlot]) {
        let _ = writeln!(out, "{}", format_date(date).bold());
        for slot in slots {
            let titles: Vec<String> = slot
                .events()
                .iter()
                .map(|e| {
                    let title = match hex_color(e.category.color()) {
                        Some(color) => e.title.color(color).to_string(),
                        None => e.title.clone(),
                    };
                    format!("{title} [{}]", e.id)
                })
                .collect();
            let _ = writeln!(out, "{} │ {}", slot.label().dimmed(), titles.join(", "));
        }

        if events.is_empty() {
            let _ = writeln!(out, "\n{}", "No events for this day".italic());
        } else {
            out.push('\n');
            self.write_events(out, events, EventColumn::within_day(true));
        }
    }

    fn write_agenda(&self, out: &mut String, agenda: &Agenda) {
        if agenda.is_empty() {
            let _ = writeln!(out, "{}", "No events found".italic());
            return;
        }

        for (i, month) in agenda.months().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", month.label().bold());
            for day in month.days() {
                let _ = writeln!(out, "{}", self.heading(day.date()));
                self.write_events(out, day.events(), EventColumn::within_day(self.verbose));
            }
        }
    }

    fn write_events(&self, out: &mut String, events: &[Event], columns: Vec<EventColumn>) {
        if events.is_empty() {
            let _ = writeln!(out, "{}", "No events found".italic());
            return;
        }
        let formatter = EventFormatter::new(columns);
        for line in formatter.format(events).to_string().lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    fn heading(&self, date: NaiveDate) -> String {
        let heading = format_day_heading(date);
        if date == self.today {
            format!("{} {}", heading.bold(), "(today)".green())
        } else {
            heading.bold().to_string()
        }
    }
}

/// One coloured dot per event, by category, at most [`MAX_MARKERS`].
fn markers(events: &[Event]) -> String {
    events
        .iter()
        .take(MAX_MARKERS)
        .map(|e| match hex_color(e.category.color()) {
            Some(color) => "•".color(color).to_string(),
            None => "•".to_string(),
        })
        .collect()
}
