// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use farmcal_core::Event;
use farmcal_core::datetime::{STABLE_FORMAT_DATEONLY, format_time_12h};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                let table = Table {
                    columns: &self.formatter.columns,
                    separator: "  ",
                    padding: true,
                    data: self.events,
                };
                let mut buf = Vec::new();
                table.write_to(&mut buf).map_err(|_| fmt::Error)?;
                write!(f, "{}", String::from_utf8_lossy(&buf))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Date,
    TimeRange,
    Title,
    Category,
    Priority,
    Location,
    Status,
}

impl EventColumn {
    /// Columns shown when listing events.
    pub fn list(verbose: bool) -> Vec<EventColumn> {
        use EventColumn::*;
        if verbose {
            vec![Status, Id, Date, TimeRange, Title, Category, Priority, Location]
        } else {
            vec![Status, Id, Date, TimeRange, Title]
        }
    }

    /// Columns shown below a day heading, where the date is implied.
    pub fn within_day(verbose: bool) -> Vec<EventColumn> {
        use EventColumn::*;
        if verbose {
            vec![Status, Id, TimeRange, Title, Category, Priority, Location]
        } else {
            vec![Status, Id, TimeRange, Title, Category]
        }
    }
}

impl Column<Event> for EventColumn {
    fn format(&self, event: &Event) -> String {
        match self {
            EventColumn::Id => event.id.clone(),
            EventColumn::Date => event.date.format(STABLE_FORMAT_DATEONLY).to_string(),
            EventColumn::TimeRange => format!(
                "{} - {}",
                format_time_12h(&event.start_time),
                format_time_12h(&event.end_time)
            ),
            EventColumn::Title => event.title.clone(),
            EventColumn::Category => event.category.to_string(),
            EventColumn::Priority => event.priority.to_string(),
            EventColumn::Location => event.location.clone().unwrap_or_default(),
            EventColumn::Status => match event.is_completed {
                true => "✓".to_string(),
                false => "○".to_string(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::TimeRange => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &Event) -> Option<Color> {
        match self {
            EventColumn::Category => hex_color(event.category.color()),
            EventColumn::Priority => hex_color(event.priority.color()),
            EventColumn::Title | EventColumn::Status if event.is_completed => {
                Some(Color::BrightBlack)
            }
            _ => None,
        }
    }
}

/// Parse a `#rrggbb` colour.
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
