//! Immutable locale and calendar settings shared by the grid builder,
//! weekday labels and the engine.

use std::str::FromStr;

use chrono::{DateTime, Local, Locale, TimeZone, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use super::error::CalendarError;

pub const DEFAULT_LOCALE_ID: &str = "en_US";

/// Locale-configured start of the week, 1 = Sunday through 7 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirstWeekday(u8);

impl FirstWeekday {
    pub const SUNDAY: Self = Self(1);
    pub const MONDAY: Self = Self(2);
    pub const SATURDAY: Self = Self(7);

    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if (1..=7).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CalendarError::InvalidFirstWeekday(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn weekday(self) -> Weekday {
        match self.0 {
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            7 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }
}

impl Default for FirstWeekday {
    fn default() -> Self {
        Self::SUNDAY
    }
}

/// Time zone used to decide which day "today" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarTimeZone {
    /// Whatever zone the device is currently set to
    #[default]
    Device,
    Named(Tz),
}

impl CalendarTimeZone {
    /// Parse an IANA zone name. Empty input and `"local"` mean the device zone.
    pub fn parse(name: &str) -> Result<Self, CalendarError> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("local") {
            return Ok(Self::Device);
        }
        Tz::from_str(name)
            .map(Self::Named)
            .map_err(|_| CalendarError::UnknownTimeZone(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Device => "local",
            Self::Named(tz) => tz.name(),
        }
    }

    /// Calendar day of `instant` as seen from this zone.
    pub fn local_date<T: TimeZone>(&self, instant: &DateTime<T>) -> CalendarDate {
        let naive = match self {
            Self::Device => instant.with_timezone(&Local).date_naive(),
            Self::Named(tz) => instant.with_timezone(tz).date_naive(),
        };
        CalendarDate::from_naive(naive)
    }
}

/// How many trailing next-month cells a grid carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPolicy {
    /// Stop at the end of the week holding the month's last day
    #[default]
    CompleteWeeks,
    /// Always six rows (42 cells) for uniform row height
    SixWeeks,
}

/// Calendar settings for one engine instance. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    first_weekday: FirstWeekday,
    time_zone: CalendarTimeZone,
    locale_id: String,
    grid_policy: GridPolicy,
}

impl CalendarConfig {
    pub fn new(
        first_weekday: FirstWeekday,
        time_zone: CalendarTimeZone,
        locale_id: impl Into<String>,
        grid_policy: GridPolicy,
    ) -> Self {
        Self {
            first_weekday,
            time_zone,
            locale_id: locale_id.into(),
            grid_policy,
        }
    }

    /// Build from raw settings values, falling back field by field to the
    /// defaults (Sunday, device zone, `en_US`) instead of failing.
    pub fn from_parts(
        first_weekday: u8,
        time_zone: &str,
        locale_id: &str,
        grid_policy: GridPolicy,
    ) -> Self {
        let first_weekday = FirstWeekday::new(first_weekday).unwrap_or_else(|err| {
            log::warn!("{}; falling back to Sunday", err);
            FirstWeekday::SUNDAY
        });
        let time_zone = CalendarTimeZone::parse(time_zone).unwrap_or_else(|err| {
            log::warn!("{}; falling back to device time zone", err);
            CalendarTimeZone::Device
        });
        let locale_id = if parse_locale(locale_id).is_some() {
            locale_id.trim().to_string()
        } else {
            log::warn!(
                "Unsupported locale '{}'; falling back to {}",
                locale_id,
                DEFAULT_LOCALE_ID
            );
            DEFAULT_LOCALE_ID.to_string()
        };

        Self {
            first_weekday,
            time_zone,
            locale_id,
            grid_policy,
        }
    }

    pub fn first_weekday(&self) -> FirstWeekday {
        self.first_weekday
    }

    pub fn time_zone(&self) -> CalendarTimeZone {
        self.time_zone
    }

    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    pub fn grid_policy(&self) -> GridPolicy {
        self.grid_policy
    }

    /// Resolved locale for label formatting, if the identifier is known.
    pub fn locale(&self) -> Option<Locale> {
        parse_locale(&self.locale_id)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(
            FirstWeekday::SUNDAY,
            CalendarTimeZone::Device,
            DEFAULT_LOCALE_ID,
            GridPolicy::CompleteWeeks,
        )
    }
}

/// Accepts both `en_US` and BCP-47 style `en-US` identifiers.
fn parse_locale(id: &str) -> Option<Locale> {
    let normalized = id.trim().replace('-', "_");
    if normalized.is_empty() {
        return None;
    }
    Locale::try_from(normalized.as_str()).ok()
}
