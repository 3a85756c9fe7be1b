// Test fixtures - reusable test data
// Provides consistent days and events across integration tests

#![allow(dead_code)]

use day_planner::models::date_key::DateKey;
use day_planner::models::event::EventDraft;
use day_planner::models::time_of_day::TimeOfDay;

pub fn time(value: &str) -> TimeOfDay {
    value.parse().expect("fixture time should be valid")
}

/// Sample days for testing
pub mod dates {
    use super::*;

    /// Friday 15 March 2024
    pub fn march_15_2024() -> DateKey {
        "2024-03-15".parse().unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> DateKey {
        "2024-02-29".parse().unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> DateKey {
        "2025-12-31".parse().unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// 09:00-10:00 team meeting
    pub fn morning_meeting() -> EventDraft {
        EventDraft::new("Team Meeting", time("09:00"), time("10:00"))
            .with_description("Weekly planning")
    }

    /// 10:00-11:00, touching the end of the morning meeting
    pub fn follow_up() -> EventDraft {
        EventDraft::new("Follow-up", time("10:00"), time("11:00"))
    }

    /// 09:30-10:30, overlapping the morning meeting
    pub fn clashing_call() -> EventDraft {
        EventDraft::new("Client Call", time("09:30"), time("10:30"))
    }

    /// 12:00-13:00 lunch
    pub fn lunch() -> EventDraft {
        EventDraft::new("Lunch", time("12:00"), time("13:00")).with_description("With the team")
    }
}
