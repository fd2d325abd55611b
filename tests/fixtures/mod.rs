// Test fixtures - reusable test data
// Provides consistent dates, configs and clocks across all test files

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use mood_calendar::models::calendar::{
    CalendarConfig, CalendarDate, CalendarTimeZone, FirstWeekday, GridPolicy,
};
use mood_calendar::services::calendar::ManualClock;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid fixture date")
    }

    /// March 1, 2024 (leap year, falls on a Friday)
    pub fn march_2024() -> CalendarDate {
        ymd(2024, 3, 1)
    }

    /// Jan 15, 2025
    pub fn mid_january_2025() -> CalendarDate {
        ymd(2025, 1, 15)
    }

    /// Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> CalendarDate {
        ymd(2024, 2, 29)
    }
}

/// Sample calendar configs for testing
pub mod configs {
    use super::*;

    pub fn with(first_weekday: u8, policy: GridPolicy) -> CalendarConfig {
        CalendarConfig::new(
            FirstWeekday::new(first_weekday).expect("valid fixture weekday"),
            CalendarTimeZone::parse("UTC").expect("UTC is always known"),
            "en_US",
            policy,
        )
    }

    pub fn sunday_first() -> CalendarConfig {
        with(1, GridPolicy::CompleteWeeks)
    }

    pub fn monday_first() -> CalendarConfig {
        with(2, GridPolicy::CompleteWeeks)
    }
}

/// Manual clock pinned to mid-morning UTC on the given day
pub fn clock_on(year: i32, month: u32, day: u32) -> ManualClock {
    ManualClock::new(
        Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
            .single()
            .expect("valid fixture instant"),
    )
}
