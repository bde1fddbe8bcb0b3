// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use farmcal_core::{Category, CategoryFilter, Priority};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone()
    }

    pub fn ids() -> Arg {
        arg!(id: <ID> "The ids of the events").num_args(1..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("id")
            .expect("id is required")
            .cloned()
            .collect()
    }
}

/// Arguments selecting which events a view shows.
#[derive(Debug, Clone, Copy)]
pub struct ViewArgs;

impl ViewArgs {
    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Date to show, YYYY-MM-DD, today, tomorrow or +N/-N days")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn category() -> Arg {
        arg!(--category <CATEGORY> "Only show events of this category, or all")
            .value_parser(|s: &str| s.parse::<CategoryFilter>())
    }

    pub fn get_category(matches: &ArgMatches) -> CategoryFilter {
        matches
            .get_one::<CategoryFilter>("category")
            .cloned()
            .unwrap_or_default()
    }

    pub fn hide_completed() -> Arg {
        arg!(--"hide-completed" "Hide completed events")
    }

    pub fn get_hide_completed(matches: &ArgMatches) -> bool {
        matches.get_flag("hide-completed")
    }

    pub fn search() -> Arg {
        arg!(-s --search <QUERY> "Only show events matching the query")
            .long_help(
                "Only show events whose title, description, location or crop contains the \
                 query, ignoring case",
            )
    }

    pub fn get_search(matches: &ArgMatches) -> Option<String> {
        matches.get_one("search").cloned()
    }
}

/// Arguments describing the fields of an event.
#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn title(positional: bool) -> Arg {
        if positional {
            arg!(title: <TITLE> "Title of the event")
        } else {
            arg!(title: -t --title <TITLE> "Title of the event")
        }
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Date of the event, YYYY-MM-DD, today, tomorrow or +N/-N days")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start time of the event, HH:MM")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End time of the event, HH:MM")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn category() -> Arg {
        arg!(--category <CATEGORY> "Category of the event")
            .value_parser(|s: &str| s.parse::<Category>())
    }

    pub fn get_category(matches: &ArgMatches) -> Option<Category> {
        matches.get_one::<Category>("category").cloned()
    }

    pub fn priority() -> Arg {
        arg!(-p --priority <PRIORITY> "Priority of the event")
            .value_parser(value_parser!(Priority))
    }

    pub fn get_priority(matches: &ArgMatches) -> Option<Priority> {
        matches.get_one("priority").copied()
    }

    pub fn location() -> Arg {
        arg!(--location <LOCATION> "Where the event takes place")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn description() -> Arg {
        arg!(--description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn notes() -> Arg {
        arg!(--notes <NOTES> "Notes of the event")
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }

    pub fn crop() -> Arg {
        arg!(--crop <CROP> "The crop the event is about")
    }

    pub fn get_crop(matches: &ArgMatches) -> Option<String> {
        matches.get_one("crop").cloned()
    }

    pub fn labor() -> Arg {
        arg!(--labor <PEOPLE> "Number of people required")
            .value_parser(value_parser!(u32).range(1..))
    }

    pub fn get_labor(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("labor").copied()
    }

    pub fn reminder() -> Arg {
        arg!(--reminder <BOOL> "Whether to set a reminder")
            .value_parser(value_parser!(bool))
            .action(ArgAction::Set)
    }

    pub fn get_reminder(matches: &ArgMatches) -> Option<bool> {
        matches.get_one("reminder").copied()
    }

    pub fn weather() -> Arg {
        arg!(--"weather-dependent" <BOOL> "Whether the event depends on the weather")
            .value_parser(value_parser!(bool))
            .action(ArgAction::Set)
    }

    pub fn get_weather(matches: &ArgMatches) -> Option<bool> {
        matches.get_one("weather-dependent").copied()
    }
}
