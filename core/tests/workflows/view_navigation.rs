// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! View navigation workflow tests.
//!
//! These tests walk through the view modes the way a user would and check that the visible
//! events and the derived structures follow.

use std::sync::Arc;

use farmcal_core::{
    CalendarView, Category, CategoryFilter, FarmCalendar, MemoryStore, ViewMode, month_grid,
};

use crate::common::{assert_ids, test_config, test_event, ymd};

async fn calendar_with_may_events() -> FarmCalendar {
    let mut harvest = test_event("harvest", "Harvest Beans", ymd(2024, 5, 14), "07:00");
    harvest.category = Category::Harvesting;
    harvest.is_completed = true;
    let mut market = test_event("market", "Market Day", ymd(2024, 6, 1), "06:00");
    market.category = Category::Market;
    let events = vec![
        market,
        test_event("plant", "Plant Maize", ymd(2024, 5, 17), "08:00"),
        harvest,
        test_event("early", "Scout Fields", ymd(2024, 5, 17), "06:00"),
        test_event("april", "Prepare Beds", ymd(2024, 4, 30), "09:00"),
    ];
    let store = Arc::new(MemoryStore::with_events(events));
    FarmCalendar::with_store(test_config("/unused/events.json"), store, ymd(2024, 5, 15)).await
}

#[tokio::test]
async fn view_navigation_month_to_day_and_back() {
    // Arrange
    let mut calendar = calendar_with_may_events().await;

    // Assert - month view shows May only
    assert_eq!(calendar.view().mode(), ViewMode::Month);
    assert_ids(calendar.visible_events(), &["harvest", "early", "plant"]);

    // Act - open a day from the grid
    let mode = calendar.select_date(ymd(2024, 5, 17));

    // Assert
    assert_eq!(mode, ViewMode::Day);
    assert_ids(calendar.visible_events(), &["early", "plant"]);

    // Act - back to the month
    calendar.set_mode(ViewMode::Month);
    assert_eq!(calendar.view().current_month(), ymd(2024, 5, 1));
    assert_eq!(calendar.visible_events().len(), 3);
}

#[tokio::test]
async fn view_navigation_week_spans_month_boundary() {
    // Arrange
    let mut calendar = calendar_with_may_events().await;
    calendar.set_mode(ViewMode::Week);

    // Act - the week of May 29th runs from Sunday May 26th to Saturday June 1st
    calendar.select_date(ymd(2024, 5, 29));

    // Assert
    assert_eq!(calendar.view().mode(), ViewMode::Week);
    assert_ids(calendar.visible_events(), &["market"]);
    match calendar.current_view() {
        CalendarView::Week { days, .. } => {
            assert_eq!(days[0], ymd(2024, 5, 26));
            assert_eq!(days[6], ymd(2024, 6, 1));
        }
        other => panic!("expected week view, got {other:?}"),
    }
}

#[tokio::test]
async fn view_navigation_month_paging() {
    // Arrange
    let mut calendar = calendar_with_may_events().await;

    // Act
    calendar.previous_month();

    // Assert
    assert_ids(calendar.visible_events(), &["april"]);
    match calendar.current_view() {
        CalendarView::Month { grid, .. } => assert_eq!(grid, month_grid(2024, 4)),
        other => panic!("expected month view, got {other:?}"),
    }

    // Act
    calendar.next_month();
    calendar.next_month();

    // Assert
    assert_ids(calendar.visible_events(), &["market"]);

    // Act
    calendar.go_to_today();

    // Assert
    assert_eq!(calendar.view().current_month(), ymd(2024, 5, 1));
    assert_eq!(calendar.view().selected_date(), ymd(2024, 5, 15));
}

#[tokio::test]
async fn view_navigation_agenda_with_filters() {
    // Arrange
    let mut calendar = calendar_with_may_events().await;
    calendar.set_mode(ViewMode::Agenda);

    // Act
    calendar.set_show_completed(false);

    // Assert - chronological month groups, completed harvest hidden
    match calendar.current_view() {
        CalendarView::Agenda(agenda) => {
            let labels: Vec<&str> = agenda.months().iter().map(|m| m.label()).collect();
            assert_eq!(labels, vec!["April 2024", "May 2024", "June 2024"]);
            let may = agenda.get("May 2024").unwrap();
            assert_eq!(may.days().len(), 1);
            assert_ids(may.days()[0].events(), &["early", "plant"]);
        }
        other => panic!("expected agenda view, got {other:?}"),
    }

    // Act
    calendar.set_category(CategoryFilter::Only(Category::Market));

    // Assert
    assert_ids(calendar.visible_events(), &["market"]);
}

#[tokio::test]
async fn view_navigation_markers_ignore_filters() {
    // Arrange
    let mut calendar = calendar_with_may_events().await;

    // Act
    calendar.set_search_query("nothing matches this");

    // Assert
    assert!(calendar.visible_events().is_empty());
    assert_eq!(calendar.count_on(ymd(2024, 5, 17)), 2);
    assert_ids(&calendar.events_on(ymd(2024, 5, 17)), &["early", "plant"]);
}
