use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use super::config::CalendarConfig;
use super::error::CalendarError;
use crate::utils::date;

/// A calendar day with no time-of-day component.
///
/// Two values are the same day exactly when year, month and day match, so
/// daylight-saving shifts can never move a cell between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The local day `instant` falls on in the configured time zone.
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>, config: &CalendarConfig) -> Self {
        config.time_zone().local_date(instant)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Month anchor: the first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn is_first_of_month(&self) -> bool {
        self.0.day() == 1
    }

    /// First day of the month `months` away from this date's month.
    ///
    /// Always lands on day 1, so month-end clamping can't leak into anchors.
    pub fn add_months(&self, months: i32) -> Option<Self> {
        date::first_of_shifted_month(self.0, months).map(Self)
    }

    pub fn days_in_month(&self) -> u32 {
        date::days_in_month(self.year(), self.month()).unwrap_or(28)
    }

    /// Last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        self.0
            .with_day(self.days_in_month())
            .map(Self)
            .unwrap_or(*self)
    }

    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    pub fn same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::InvalidDate(s.to_string()))
    }
}
