// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scheduling engine of farmcal: filters, grids, week ranges, agenda grouping and the view
//! state of a farm activity calendar.

mod agenda;
mod calendar;
mod config;
pub mod datetime;
mod error;
mod event;
mod filter;
mod grid;
mod sample;
mod schedule;
mod store;
mod types;
mod view;

pub use crate::agenda::{Agenda, DayGroup, MonthGroup, group_agenda};
pub use crate::calendar::{CalendarView, FarmCalendar, Mutation};
pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::error::{CalendarError, StoreError, ValidationError};
pub use crate::event::{DEFAULT_END_TIME, DEFAULT_START_TIME, Event, EventDraft, EventPatch};
pub use crate::filter::{
    CategoryFilter, FilterCriteria, ViewMode, count_on, events_on, filter_events, sort_events,
};
pub use crate::grid::{CalendarCell, GRID_CELLS, MonthGrid, month_grid};
pub use crate::sample::sample_events;
pub use crate::schedule::{DEFAULT_DAY_HOURS, HourSlot, day_schedule};
pub use crate::store::{EventStore, JsonFileStore, MemoryStore};
pub use crate::types::{Category, NEUTRAL_COLOR, Priority};
pub use crate::view::ViewState;
