// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use farmcal_core::{Category, Event, EventPatch, FarmCalendar, Mutation, Priority};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::{EventColumn, EventFormatter};
use crate::util::{OutputFormat, parse_date};

/// Fields shared by the add and edit commands, as typed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub crop: Option<String>,
    pub labor: Option<u32>,
    pub reminder: Option<bool>,
    pub weather: Option<bool>,
}

impl EventFields {
    fn args(cmd: Command, positional_title: bool) -> Command {
        cmd.arg(EventArgs::title(positional_title))
            .arg(EventArgs::date())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::category())
            .arg(EventArgs::priority())
            .arg(EventArgs::location())
            .arg(EventArgs::description())
            .arg(EventArgs::notes())
            .arg(EventArgs::crop())
            .arg(EventArgs::labor())
            .arg(EventArgs::reminder())
            .arg(EventArgs::weather())
    }

    fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            date: EventArgs::get_date(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            category: EventArgs::get_category(matches),
            priority: EventArgs::get_priority(matches),
            location: EventArgs::get_location(matches),
            description: EventArgs::get_description(matches),
            notes: EventArgs::get_notes(matches),
            crop: EventArgs::get_crop(matches),
            labor: EventArgs::get_labor(matches),
            reminder: EventArgs::get_reminder(matches),
            weather: EventArgs::get_weather(matches),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub fields: EventFields,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        let cmd = Command::new(Self::NAME)
            .alias("new")
            .about("Add a new farm activity")
            .long_about(
                "\
Add a new farm activity. Fields that are not given fall back to the selected date, \
08:00-09:00 and the configured default category and priority.",
            );
        EventFields::args(cmd, true)
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: EventFields::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut FarmCalendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let f = self.fields;
        let mut draft = calendar.default_draft();
        if let Some(title) = f.title {
            draft.title = title;
        }
        if let Some(date) = f.date {
            draft.date = Some(parse_date(calendar.today(), &date)?);
        }
        if let Some(start) = f.start {
            draft.start_time = start;
        }
        if let Some(end) = f.end {
            draft.end_time = end;
        }
        if let Some(category) = f.category {
            draft.category = category;
        }
        if let Some(priority) = f.priority {
            draft.priority = priority;
        }
        if let Some(labor) = f.labor {
            draft.labor = labor;
        }
        if let Some(reminder) = f.reminder {
            draft.reminder_set = reminder;
        }
        if let Some(weather) = f.weather {
            draft.weather_dependent = weather;
        }
        draft.location = f.location;
        draft.description = f.description;
        draft.notes = f.notes;
        draft.related_crop = f.crop;

        let mutation = calendar.add_event(draft).await?;
        report(mutation, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub fields: EventFields,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        let cmd = Command::new(Self::NAME)
            .about("Edit a farm activity")
            .long_about(
                "\
Edit a farm activity. Only the given fields change; pass an empty string to clear the \
location, description, notes or crop.",
            )
            .arg(CommonArgs::id());
        EventFields::args(cmd, false)
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: CommonArgs::get_id(matches),
            fields: EventFields::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut FarmCalendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let patch = self.patch(calendar)?;
        if patch.is_empty() {
            return Err("Nothing to change, pass at least one field".into());
        }

        let mutation = calendar.update_event(&self.id, patch).await?;
        report(mutation, self.output_format, self.verbose);
        Ok(())
    }

    fn patch(&self, calendar: &FarmCalendar) -> Result<EventPatch, Box<dyn Error>> {
        let f = self.fields.clone();
        let date = match f.date {
            Some(date) => Some(parse_date(calendar.today(), &date)?),
            None => None,
        };
        let clearable = |v: Option<String>| v.map(|v| (!v.is_empty()).then_some(v));
        Ok(EventPatch {
            title: f.title,
            description: clearable(f.description),
            date,
            start_time: f.start,
            end_time: f.end,
            location: clearable(f.location),
            category: f.category,
            priority: f.priority,
            is_completed: None,
            reminder_set: f.reminder,
            weather_dependent: f.weather,
            notes: clearable(f.notes),
            related_crop: clearable(f.crop),
            labor: f.labor,
        })
    }
}

/// Flip the completion flag of one or more events.
#[derive(Debug, Clone)]
pub struct CmdEventDone {
    pub ids: Vec<String>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("toggle")
            .about("Mark farm activities as done, or as not done when they already are")
            .arg(CommonArgs::ids())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: CommonArgs::get_ids(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut FarmCalendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling events...");
        let mut events = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            let mutation = calendar.toggle_completion(id).await?;
            warn_unsaved(&mutation);
            events.push(mutation.value);
        }
        print_events(&events, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub ids: Vec<String>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete farm activities")
            .arg(CommonArgs::ids())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: CommonArgs::get_ids(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, calendar: &mut FarmCalendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting events...");
        let mut events = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            let mutation = calendar.delete_event(id).await?;
            warn_unsaved(&mutation);
            events.push(mutation.value);
        }
        if self.output_format == OutputFormat::Table {
            println!("{}", "Deleted:".italic());
        }
        print_events(&events, self.output_format, self.verbose);
        Ok(())
    }
}

fn report(mutation: Mutation<Event>, output_format: OutputFormat, verbose: bool) {
    warn_unsaved(&mutation);
    print_events(&[mutation.value], output_format, verbose);
}

fn warn_unsaved(mutation: &Mutation<Event>) {
    if let Err(e) = &mutation.persisted {
        println!(
            "{} {} (the change is kept until the program exits)",
            "Warning:".yellow(),
            e
        );
    }
}

fn print_events(events: &[Event], output_format: OutputFormat, verbose: bool) {
    let formatter =
        EventFormatter::new(EventColumn::list(verbose)).with_output_format(output_format);
    print!("{}", formatter.format(events));
}
