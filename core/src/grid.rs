// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::datetime::{
    back_days, days_in_month, first_of_month, forward_days, month_label, month_start,
};

/// Number of cells in a month grid: six rows of seven days.
pub const GRID_CELLS: usize = 42;

/// A single day slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    date: NaiveDate,
    is_current_month: bool,
}

impl CalendarCell {
    /// The date of this cell.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of the month, starting from 1.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Month, starting from 1.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Whether the cell belongs to the displayed month rather than the padding around it.
    pub fn is_current_month(&self) -> bool {
        self.is_current_month
    }
}

/// The 6×7 day grid of a month, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    first_weekday: u32,
    days_in_month: u32,
    cells: [CalendarCell; GRID_CELLS],
}

impl MonthGrid {
    /// Builds the grid of the month containing `date`.
    ///
    /// The grid opens with the trailing days of the previous month, so that the 1st lands on
    /// its weekday column, and is padded with the leading days of the next month up to 42
    /// cells. Months and years roll over at both ends. At the ends of the supported date
    /// range the padding cells are clamped to [`NaiveDate::MIN`] or [`NaiveDate::MAX`].
    pub fn containing(date: NaiveDate) -> Self {
        let first = month_start(date);
        let first_weekday = first.weekday().num_days_from_sunday();
        let origin = back_days(first, u64::from(first_weekday));
        let cells = std::array::from_fn(|i| {
            let date = forward_days(origin, i as u64);
            CalendarCell {
                date,
                is_current_month: date.year() == first.year() && date.month() == first.month(),
            }
        });

        Self {
            first,
            first_weekday,
            days_in_month: days_in_month(first),
            cells,
        }
    }

    /// The first day of the displayed month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Weekday index of the 1st, 0 for Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first_weekday
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Number of padding cells taken from the previous month.
    pub fn leading_days(&self) -> usize {
        self.first_weekday as usize
    }

    /// Number of padding cells taken from the next month.
    pub fn trailing_days(&self) -> usize {
        GRID_CELLS - self.leading_days() - self.days_in_month as usize
    }

    /// Header label, e.g. `February 2024`.
    pub fn label(&self) -> String {
        month_label(self.first)
    }

    /// All 42 cells, row by row.
    pub fn cells(&self) -> &[CalendarCell; GRID_CELLS] {
        &self.cells
    }

    /// The six rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    /// Position of `date` in the grid, if shown.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|c| c.date == date)
    }
}

/// Generates the 42-cell grid for the given year and month (1-based). Month numbers outside
/// `1..=12` roll into the neighbouring years.
///
/// # Panics
///
/// Panics if the year is outside the range supported by [`NaiveDate`].
pub fn month_grid(year: i32, month: i32) -> MonthGrid {
    let first =
        first_of_month(year, month).expect("year must be within the supported date range");
    MonthGrid::containing(first)
}
