use crate::models::calendar::{CalendarConfig, DateBounds};
use crate::models::settings::Settings;

/// Calendar config from stored settings. Invalid fields fall back to defaults.
pub fn settings_to_config(settings: &Settings) -> CalendarConfig {
    CalendarConfig::from_parts(
        settings.first_day_of_week,
        &settings.time_zone,
        &settings.locale,
        settings.grid_policy,
    )
}

/// Enabled-date range from stored settings. An inverted range is dropped.
pub fn settings_to_bounds(settings: &Settings) -> DateBounds {
    match (settings.min_date, settings.max_date) {
        (Some(min), Some(max)) if min > max => {
            log::warn!("Ignoring inverted date range {}..{}", min, max);
            DateBounds::unbounded()
        }
        (min, max) => DateBounds::new(min, max),
    }
}
