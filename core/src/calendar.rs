// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::agenda::{Agenda, group_agenda};
use crate::datetime::week_range;
use crate::filter::{count_on, events_on, filter_events};
use crate::grid::MonthGrid;
use crate::sample::sample_events;
use crate::schedule::{HourSlot, day_schedule};
use crate::store::retain_unique_ids;
use crate::{
    CalendarError, CategoryFilter, Config, Event, EventDraft, EventPatch, EventStore,
    JsonFileStore, StoreError, ViewMode, ViewState,
};

/// Result of a successful mutation.
///
/// The in-memory collection has changed whether or not the save went through; `persisted`
/// tells which. A crash before a successful save loses the change.
#[derive(Debug)]
pub struct Mutation<T> {
    /// The event that was created, updated, toggled or removed.
    pub value: T,

    /// Outcome of saving the whole collection afterwards.
    pub persisted: Result<(), StoreError>,
}

impl<T> Mutation<T> {
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }

    /// Turns a failed save into an error, dropping the value.
    pub fn into_result(self) -> Result<T, CalendarError> {
        self.persisted?;
        Ok(self.value)
    }
}

/// What the active view shows, built from the visible events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarView {
    /// The displayed month and its visible events.
    Month { grid: MonthGrid, events: Vec<Event> },

    /// The seven days around the selected date and their visible events.
    Week {
        days: [NaiveDate; 7],
        events: Vec<Event>,
    },

    /// The selected date, its visible events and their hourly layout.
    Day {
        date: NaiveDate,
        events: Vec<Event>,
        slots: Vec<HourSlot>,
    },

    /// Every visible event grouped by month and date.
    Agenda(Agenda),
}

/// The farm calendar engine: owns the events, the store and the view state.
///
/// Every mutation and every view change recomputes the visible events from scratch.
pub struct FarmCalendar {
    today: NaiveDate,
    config: Config,
    store: Arc<dyn EventStore>,
    events: Vec<Event>,
    view: ViewState,
    visible: Vec<Event>,
}

impl FarmCalendar {
    /// Opens the calendar backed by the JSON file named in the configuration.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let store = Arc::new(JsonFileStore::new(config.events_path()));
        let today = Local::now().date_naive();
        Ok(Self::with_store(config, store, today).await)
    }

    /// Opens the calendar on an arbitrary store, as seen on `today`.
    ///
    /// When the store holds nothing, the sample events are created and saved, unless
    /// disabled in the configuration. When the store cannot be read, the samples are only
    /// shown so the unreadable data is left in place.
    #[tracing::instrument(skip(config, store))]
    pub async fn with_store(config: Config, store: Arc<dyn EventStore>, today: NaiveDate) -> Self {
        let events = match store.load().await {
            Ok(Some(mut events)) => {
                retain_unique_ids(&mut events);
                events
            }
            Ok(None) if config.seed_samples => {
                tracing::info!("seeding sample events");
                let samples = sample_events(today);
                if let Err(e) = store.save(&samples).await {
                    tracing::warn!(err = %e, "failed to save sample events");
                }
                samples
            }
            Ok(None) => Vec::new(),
            Err(e) if config.seed_samples => {
                tracing::error!(err = %e, "failed to load events, showing unsaved samples");
                sample_events(today)
            }
            Err(e) => {
                tracing::error!(err = %e, "failed to load events");
                Vec::new()
            }
        };

        let mut that = Self {
            today,
            config,
            store,
            events,
            view: ViewState::new(today),
            visible: Vec::new(),
        };
        that.recompute();
        that
    }

    /// The date the calendar considers as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Refresh today to the current local date.
    pub fn refresh_today(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every event, in storage order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get an event by its id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Events passing the current criteria, sorted by date and start time.
    pub fn visible_events(&self) -> &[Event] {
        &self.visible
    }

    /// Builds the structure of the active view.
    pub fn current_view(&self) -> CalendarView {
        let events = self.visible.clone();
        match self.view.mode() {
            ViewMode::Month => CalendarView::Month {
                grid: MonthGrid::containing(self.view.current_month()),
                events,
            },
            ViewMode::Week => CalendarView::Week {
                days: week_range(self.view.selected_date()),
                events,
            },
            ViewMode::Day => {
                let date = self.view.selected_date();
                let slots = day_schedule(&events, date, self.config.day_hours());
                CalendarView::Day {
                    date,
                    events,
                    slots,
                }
            }
            ViewMode::Agenda => CalendarView::Agenda(group_agenda(events)),
        }
    }

    /// All events on `date`, ignoring the filters.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        events_on(&self.events, date)
    }

    /// Number of events on `date`, ignoring the filters.
    pub fn count_on(&self, date: NaiveDate) -> usize {
        count_on(&self.events, date)
    }

    /// Create a default event draft on the selected date, based on the configuration.
    pub fn default_draft(&self) -> EventDraft {
        EventDraft {
            date: Some(self.view.selected_date()),
            category: self.config.default_category.clone(),
            priority: self.config.default_priority,
            ..EventDraft::default()
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.view.set_mode(mode);
        self.recompute();
    }

    /// Selects a day; from the month view this opens the day view.
    pub fn select_date(&mut self, date: NaiveDate) -> ViewMode {
        let mode = self.view.select_date(date);
        self.recompute();
        mode
    }

    pub fn previous_month(&mut self) {
        self.view.previous_month();
        self.recompute();
    }

    pub fn next_month(&mut self) {
        self.view.next_month();
        self.recompute();
    }

    pub fn go_to_today(&mut self) {
        self.view.go_to_today(self.today);
        self.recompute();
    }

    /// Displays the month containing `date`.
    pub fn show_month(&mut self, date: NaiveDate) {
        self.view.show_month(date);
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.view.set_category(category);
        self.recompute();
    }

    pub fn set_show_completed(&mut self, show: bool) {
        self.view.set_show_completed(show);
        self.recompute();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.set_search_query(query);
        self.recompute();
    }

    /// Add a new event from the given draft.
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn add_event(&mut self, draft: EventDraft) -> Result<Mutation<Event>, CalendarError> {
        let id = self.generate_id();
        let event = draft.into_event(id)?;
        self.events.push(event.clone());
        Ok(self.commit(event).await)
    }

    /// Apply a patch to the event with the given id.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_event(
        &mut self,
        id: &str,
        patch: EventPatch,
    ) -> Result<Mutation<Event>, CalendarError> {
        let index = self.position(id)?;
        let updated = patch.apply_to(&self.events[index])?;
        self.events[index] = updated.clone();
        Ok(self.commit(updated).await)
    }

    /// Remove the event with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_event(&mut self, id: &str) -> Result<Mutation<Event>, CalendarError> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);
        Ok(self.commit(removed).await)
    }

    /// Flip the completion flag of the event with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_completion(&mut self, id: &str) -> Result<Mutation<Event>, CalendarError> {
        let index = self.position(id)?;
        let event = &mut self.events[index];
        event.is_completed = !event.is_completed;
        let toggled = event.clone();
        Ok(self.commit(toggled).await)
    }

    fn position(&self, id: &str) -> Result<usize, CalendarError> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CalendarError::not_found(id))
    }

    /// Saves the collection and recomputes the view. The in-memory change is kept even when
    /// the save fails.
    async fn commit(&mut self, value: Event) -> Mutation<Event> {
        let persisted = self.store.save(&self.events).await;
        if let Err(e) = &persisted {
            tracing::error!(err = %e, "failed to save events");
        }
        self.recompute();
        Mutation { value, persisted }
    }

    fn recompute(&mut self) {
        self.visible = filter_events(&self.events, &self.view.criteria());
    }

    fn generate_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
            tracing::debug!(id, "generated id already exists, retrying");
        }
    }
}
