//! Month grid construction.
//!
//! Pure function over (month, config, selection, bounds, today). Dates that
//! can't be computed near the ends of chrono's range become padding cells or
//! are skipped, never a panic.

use crate::models::calendar::{
    CalendarConfig, CalendarDate, DateBounds, DayCell, DayCellOwnership, GridPolicy, MonthGrid,
};
use crate::utils::date::{days_in_month, weekday_column};

use super::clock::Clock;

const SIX_WEEK_CELLS: usize = 42;

/// Build the day grid for `month` (normalized to its first day).
pub fn build_grid(
    month: CalendarDate,
    config: &CalendarConfig,
    selection: Option<CalendarDate>,
    bounds: &DateBounds,
    today: CalendarDate,
) -> MonthGrid {
    let month = month.first_of_month();
    let Some(day_count) = days_in_month(month.year(), month.month()) else {
        log::warn!("Cannot resolve day count for {}; rendering empty grid", month);
        return MonthGrid::empty(month);
    };

    let offset = weekday_column(month.weekday(), config.first_weekday().weekday());
    let total = match config.grid_policy() {
        GridPolicy::CompleteWeeks => ((offset + day_count) as usize).div_ceil(7) * 7,
        GridPolicy::SixWeeks => SIX_WEEK_CELLS,
    };

    let resolve = |date: Option<CalendarDate>, ownership: DayCellOwnership| match date {
        Some(date) => DayCell {
            date: Some(date),
            ownership,
            is_today: date == today,
            is_selected: selection == Some(date),
            is_enabled: bounds.contains(date),
        },
        None => DayCell::padding(ownership),
    };

    let mut cells = Vec::with_capacity(total);

    for back in (1..=offset as i64).rev() {
        cells.push(resolve(
            month.checked_add_days(-back),
            DayCellOwnership::PreviousMonth,
        ));
    }

    for day in 1..=day_count {
        if let Some(date) = CalendarDate::from_ymd(month.year(), month.month(), day) {
            cells.push(resolve(Some(date), DayCellOwnership::CurrentMonth));
        }
    }

    let next_month = month.add_months(1);
    let mut trailing = 0i64;
    while cells.len() < total || cells.len() % 7 != 0 {
        let date = next_month.and_then(|first| first.checked_add_days(trailing));
        cells.push(resolve(date, DayCellOwnership::NextMonth));
        trailing += 1;
    }

    MonthGrid::new(month, cells)
}

/// [`build_grid`] with "today" resolved from `clock` in the config's time zone.
pub fn build_grid_at(
    month: CalendarDate,
    config: &CalendarConfig,
    selection: Option<CalendarDate>,
    bounds: &DateBounds,
    clock: &dyn Clock,
) -> MonthGrid {
    let today = config.time_zone().local_date(&clock.now());
    build_grid(month, config, selection, bounds, today)
}
