// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};

use crate::{Category, Event, Priority};

/// The starter set shown on first launch, placed around `today`.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let day = |offset: i64| {
        let shift = Days::new(offset.unsigned_abs());
        let date = if offset < 0 {
            today.checked_sub_days(shift)
        } else {
            today.checked_add_days(shift)
        };
        date.unwrap_or(today)
    };

    vec![
        Event {
            id: "1".to_string(),
            title: "Plant Maize".to_string(),
            description: Some("Plant maize seeds in the north field".to_string()),
            date: day(2),
            start_time: "08:00".to_string(),
            end_time: "12:00".to_string(),
            location: Some("North Field".to_string()),
            category: Category::Planting,
            priority: Priority::High,
            is_completed: false,
            reminder_set: true,
            weather_dependent: true,
            notes: Some("Use the new drought-resistant variety".to_string()),
            related_crop: Some("Maize".to_string()),
            labor: 3,
        },
        Event {
            id: "2".to_string(),
            title: "Apply Fertilizer".to_string(),
            description: Some("Apply NPK fertilizer to tomato plants".to_string()),
            date: today,
            start_time: "14:00".to_string(),
            end_time: "16:00".to_string(),
            location: Some("Vegetable Garden".to_string()),
            category: Category::Fertilizing,
            priority: Priority::Medium,
            is_completed: false,
            reminder_set: true,
            weather_dependent: false,
            notes: Some("20kg of NPK 17-17-17".to_string()),
            related_crop: Some("Tomatoes".to_string()),
            labor: 1,
        },
        Event {
            id: "3".to_string(),
            title: "Harvest Beans".to_string(),
            description: Some("Harvest the first batch of beans".to_string()),
            date: day(-1),
            start_time: "07:00".to_string(),
            end_time: "10:00".to_string(),
            location: Some("East Field".to_string()),
            category: Category::Harvesting,
            priority: Priority::Medium,
            is_completed: true,
            reminder_set: false,
            weather_dependent: false,
            notes: Some("Got approximately 50kg".to_string()),
            related_crop: Some("Beans".to_string()),
            labor: 2,
        },
        Event {
            id: "4".to_string(),
            title: "Meet with Cooperative".to_string(),
            description: Some("Monthly meeting with the farmers cooperative".to_string()),
            date: day(5),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            location: Some("Community Center".to_string()),
            category: Category::Meeting,
            priority: Priority::Medium,
            is_completed: false,
            reminder_set: true,
            weather_dependent: false,
            notes: Some("Bring production records".to_string()),
            related_crop: None,
            labor: 1,
        },
        Event {
            id: "5".to_string(),
            title: "Repair Irrigation System".to_string(),
            description: Some("Fix the leaking pipes in the irrigation system".to_string()),
            date: day(1),
            start_time: "09:00".to_string(),
            end_time: "13:00".to_string(),
            location: Some("Main Water Line".to_string()),
            category: Category::Maintenance,
            priority: Priority::High,
            is_completed: false,
            reminder_set: true,
            weather_dependent: false,
            notes: Some("Need to purchase new pipes".to_string()),
            related_crop: None,
            labor: 2,
        },
    ]
}
