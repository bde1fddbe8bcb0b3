// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::datetime::{same_month, same_week};
use crate::{Category, Event};

/// Which calendar view is shown, and therefore which time window applies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ViewMode {
    /// Events of the displayed month.
    #[default]
    Month,

    /// Events of the week containing the selected date.
    Week,

    /// Events of the selected date.
    Day,

    /// Every event, regardless of date.
    Agenda,
}

impl AsRef<str> for ViewMode {
    fn as_ref(&self) -> &str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
            ViewMode::Agenda => "agenda",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Category selection of the filter bar.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category, including unknown ones.
    #[default]
    All,

    /// Only events whose label is exactly this category's label.
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted.label() == category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Snapshot of everything that decides which events are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,

    /// Whether completed events are kept.
    pub show_completed: bool,

    /// Free-text query; empty means no search.
    pub search_query: String,

    pub view_mode: ViewMode,

    /// Anchor of the day and week windows.
    pub selected_date: NaiveDate,

    /// Anchor of the month window. Kept apart from `selected_date`: picking a day does not
    /// move the displayed month.
    pub current_month: NaiveDate,
}

impl FilterCriteria {
    /// Criteria that keep every event in the month of `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            category: CategoryFilter::All,
            show_completed: true,
            search_query: String::new(),
            view_mode: ViewMode::Month,
            selected_date: today,
            current_month: today,
        }
    }

    /// Whether `date` lies in the time window of the current view mode.
    pub fn in_window(&self, date: NaiveDate) -> bool {
        match self.view_mode {
            ViewMode::Day => date == self.selected_date,
            ViewMode::Week => same_week(date, self.selected_date),
            ViewMode::Month => same_month(date, self.current_month),
            ViewMode::Agenda => true,
        }
    }
}

/// Filters and sorts events for display.
///
/// Applies, in order: category, completion, search and the time window of the view mode,
/// then sorts by date and start time. The sort is stable, so events sharing both keep their
/// input order.
pub fn filter_events(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    let query = criteria.search_query.to_lowercase();

    let mut filtered: Vec<Event> = events
        .iter()
        .filter(|e| criteria.category.matches(&e.category))
        .filter(|e| criteria.show_completed || !e.is_completed)
        .filter(|e| query.is_empty() || e.matches_query(&query))
        .filter(|e| criteria.in_window(e.date))
        .cloned()
        .collect();

    sort_events(&mut filtered);
    tracing::trace!(total = events.len(), visible = filtered.len(), "filtered events");
    filtered
}

/// Sorts by date, then by start time compared as strings.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

/// Every event on `date`, ordered by start time. Used for the per-day markers of the month
/// and week grids, which always look at the whole collection.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<Event> {
    let mut found: Vec<Event> = events.iter().filter(|e| e.date == date).cloned().collect();
    sort_events(&mut found);
    found
}

/// Number of events on `date`.
pub fn count_on(events: &[Event], date: NaiveDate) -> usize {
    events.iter().filter(|e| e.date == date).count()
}
