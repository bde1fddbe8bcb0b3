// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::datetime::{month_start, shift_month};
use crate::{CategoryFilter, FilterCriteria, ViewMode};

/// State of the calendar screen: the view mode, the selected date, the displayed month and
/// the filter bar.
///
/// The state starts in [`ViewMode::Month`] and has no terminal state. Every method is a
/// transition; callers recompute the visible events afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    selected_date: NaiveDate,
    current_month: NaiveDate,
    category: CategoryFilter,
    show_completed: bool,
    search_query: String,
}

impl ViewState {
    /// Month view of `today`, nothing filtered.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Month,
            selected_date: today,
            current_month: month_start(today),
            category: CategoryFilter::All,
            show_completed: true,
            search_query: String::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Switches to `mode`. Always allowed.
    pub fn set_mode(&mut self, mode: ViewMode) {
        tracing::debug!(from = %self.mode, to = %mode, "switching view mode");
        self.mode = mode;
    }

    /// Selects a day cell. In month view this opens the day view; in every other mode only
    /// the selected date changes. The displayed month is left alone.
    pub fn select_date(&mut self, date: NaiveDate) -> ViewMode {
        self.selected_date = date;
        if self.mode == ViewMode::Month {
            self.set_mode(ViewMode::Day);
        }
        self.mode
    }

    /// Shows the previous month.
    pub fn previous_month(&mut self) {
        if let Some(month) = shift_month(self.current_month, -1) {
            self.current_month = month;
        }
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        if let Some(month) = shift_month(self.current_month, 1) {
            self.current_month = month;
        }
    }

    /// Shows the month of `today` and selects it.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_month = month_start(today);
        self.selected_date = today;
    }

    /// Displays `month` without touching the selected date.
    pub fn show_month(&mut self, month: NaiveDate) {
        self.current_month = month_start(month);
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_show_completed(&mut self, show: bool) {
        self.show_completed = show;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Snapshot for the filter pipeline.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category.clone(),
            show_completed: self.show_completed,
            search_query: self.search_query.clone(),
            view_mode: self.mode,
            selected_date: self.selected_date,
            current_month: self.current_month,
        }
    }
}
