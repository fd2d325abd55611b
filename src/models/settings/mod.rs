// Settings module
// User-editable calendar preferences, stored as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar::{CalendarDate, CalendarTimeZone, GridPolicy, DEFAULT_LOCALE_ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 1 = Sunday through 7 = Saturday
    pub first_day_of_week: u8,
    /// IANA zone name, or "local" for the device zone
    pub time_zone: String,
    pub locale: String,
    pub grid_policy: GridPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<CalendarDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 1, // Sunday
            time_zone: "local".to_string(),
            locale: DEFAULT_LOCALE_ID.to_string(),
            grid_policy: GridPolicy::CompleteWeeks,
            min_date: None,
            max_date: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !(1..=7).contains(&self.first_day_of_week) {
            return Err(SettingsValidationError::InvalidFirstDayOfWeek(
                self.first_day_of_week,
            ));
        }

        if CalendarTimeZone::parse(&self.time_zone).is_err() {
            return Err(SettingsValidationError::UnknownTimeZone(
                self.time_zone.clone(),
            ));
        }

        if self.locale.trim().is_empty() {
            return Err(SettingsValidationError::EmptyLocale);
        }

        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(SettingsValidationError::InvertedDateRange { min, max });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("first day of week must be 1-7, got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
    #[error("locale cannot be empty")]
    EmptyLocale,
    #[error("min date {min} is after max date {max}")]
    InvertedDateRange { min: CalendarDate, max: CalendarDate },
}
