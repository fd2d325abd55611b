// Date utility functions
// Month arithmetic shared by the calendar models and services

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in the given month, or `None` for an invalid month/year.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let first = NaiveDate::from_ymd_opt(year, 2, 1)?;
            Some(if first.leap_year() { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Shift a (year, month) pair by `delta_months`, wrapping across year boundaries.
pub fn shift_month(year: i32, month: u32, delta_months: i32) -> Option<(i32, u32)> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let total_months = (year as i64) * 12 + (month as i64 - 1) + delta_months as i64;
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    Some((new_year, new_month))
}

/// First day of the month `delta_months` away from `date`'s month.
pub fn first_of_shifted_month(date: NaiveDate, delta_months: i32) -> Option<NaiveDate> {
    let (year, month) = shift_month(date.year(), date.month(), delta_months)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Column of `weekday` in a week that starts on `first` (0..=6).
pub fn weekday_column(weekday: Weekday, first: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - first.num_days_from_sunday()) % 7
}
