//! Calendar value types.
//!
//! Dates, locale configuration and the day-cell grid snapshot the engine hands
//! to whatever surface renders a month page.

mod config;
mod date;
mod error;
mod grid;

pub use config::{CalendarConfig, CalendarTimeZone, FirstWeekday, GridPolicy, DEFAULT_LOCALE_ID};
pub use date::CalendarDate;
pub use error::CalendarError;
pub use grid::{DateBounds, DayCell, DayCellOwnership, MonthGrid};
