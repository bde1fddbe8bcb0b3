// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use farmcal_core::{CategoryFilter, FarmCalendar, ViewMode};

use crate::arg::{CommonArgs, ViewArgs};
use crate::calendar_formatter::CalendarFormatter;
use crate::util::parse_date;

/// Render one of the calendar views.
#[derive(Debug, Clone)]
pub struct CmdView {
    pub mode: ViewMode,
    pub date: Option<String>,
    pub category: CategoryFilter,
    pub hide_completed: bool,
    pub search: Option<String>,
    pub verbose: bool,
}

impl CmdView {
    pub const MONTH: &str = "month";
    pub const WEEK: &str = "week";
    pub const DAY: &str = "day";
    pub const AGENDA: &str = "agenda";

    /// Subcommands for every view mode.
    pub fn commands() -> [Command; 4] {
        [
            Self::command(ViewMode::Month)
                .alias("m")
                .about("Show a month grid with the events of that month"),
            Self::command(ViewMode::Week)
                .alias("w")
                .about("Show the seven days of a week"),
            Self::command(ViewMode::Day)
                .alias("d")
                .about("Show the hourly schedule of a day"),
            Self::command(ViewMode::Agenda)
                .alias("a")
                .about("List every event grouped by month and day"),
        ]
    }

    pub fn command(mode: ViewMode) -> Command {
        Command::new(Self::name(mode))
            .arg(ViewArgs::date())
            .arg(ViewArgs::category())
            .arg(ViewArgs::hide_completed())
            .arg(ViewArgs::search())
            .arg(CommonArgs::verbose())
    }

    pub fn name(mode: ViewMode) -> &'static str {
        match mode {
            ViewMode::Month => Self::MONTH,
            ViewMode::Week => Self::WEEK,
            ViewMode::Day => Self::DAY,
            ViewMode::Agenda => Self::AGENDA,
        }
    }

    pub fn from(mode: ViewMode, matches: &ArgMatches) -> Self {
        Self {
            mode,
            date: ViewArgs::get_date(matches),
            category: ViewArgs::get_category(matches),
            hide_completed: ViewArgs::get_hide_completed(matches),
            search: ViewArgs::get_search(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    /// The month view of today, as shown when no subcommand is given.
    pub fn month() -> Self {
        Self {
            mode: ViewMode::Month,
            date: None,
            category: CategoryFilter::All,
            hide_completed: false,
            search: None,
            verbose: false,
        }
    }

    pub async fn run(self, calendar: &mut FarmCalendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering view...");
        self.apply(calendar)?;
        let formatter = CalendarFormatter::new(calendar.today(), self.verbose);
        print!("{}", formatter.format(calendar));
        Ok(())
    }

    /// Moves the calendar to the requested view and filters.
    pub fn apply(&self, calendar: &mut FarmCalendar) -> Result<(), Box<dyn Error>> {
        if let Some(date) = &self.date {
            let date = parse_date(calendar.today(), date)?;
            calendar.show_month(date);
            // selecting from the month view would switch to the day view
            calendar.set_mode(ViewMode::Week);
            calendar.select_date(date);
        }
        calendar.set_mode(self.mode);
        calendar.set_category(self.category.clone());
        calendar.set_show_completed(!self.hide_completed);
        if let Some(search) = &self.search {
            calendar.set_search_query(search.as_str());
        }
        Ok(())
    }
}
