use serde::{Deserialize, Serialize};

use super::date::CalendarDate;

/// Which logical month a grid cell's date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCellOwnership {
    PreviousMonth,
    CurrentMonth,
    NextMonth,
}

/// Optional inclusive `[min, max]` range of selectable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }
}

/// One rendered day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// `None` only for padding cells whose date could not be computed
    pub date: Option<CalendarDate>,
    pub ownership: DayCellOwnership,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_enabled: bool,
}

impl DayCell {
    pub fn padding(ownership: DayCellOwnership) -> Self {
        Self {
            date: None,
            ownership,
            is_today: false,
            is_selected: false,
            is_enabled: false,
        }
    }

    pub fn day_number(&self) -> Option<u32> {
        self.date.map(|date| date.day())
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    /// Whether a tap on this cell should be acted on.
    pub fn is_interactive(&self) -> bool {
        self.date.is_some() && self.is_enabled
    }
}

/// Immutable snapshot of one month's day cells, a whole number of weeks long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    month: CalendarDate,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub(crate) fn new(month: CalendarDate, cells: Vec<DayCell>) -> Self {
        debug_assert!(cells.len() % 7 == 0, "grid must hold whole weeks");
        Self { month, cells }
    }

    pub fn empty(month: CalendarDate) -> Self {
        Self {
            month,
            cells: Vec::new(),
        }
    }

    /// The month anchor this grid displays.
    pub fn month(&self) -> CalendarDate {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of seven cells, starting on the configured first weekday.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    pub fn cell_for(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == Some(date))
    }

    /// Number of previous-month filler cells before day 1.
    pub fn leading_filler_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| cell.ownership == DayCellOwnership::PreviousMonth)
            .count()
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells
            .iter()
            .filter(|cell| cell.ownership == DayCellOwnership::CurrentMonth)
    }

    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_selected)
    }
}
