//! Diary-entry markers layered onto a month grid.
//!
//! Whether a day has a journal entry is owned by the diary store, not the
//! calendar; the store is injected through [`EntryLookup`].

use std::collections::{BTreeSet, HashSet};

use crate::models::calendar::{CalendarDate, DayCell, MonthGrid};

#[cfg_attr(test, mockall::automock)]
pub trait EntryLookup {
    fn has_entry(&self, date: CalendarDate) -> bool;
}

impl EntryLookup for HashSet<CalendarDate> {
    fn has_entry(&self, date: CalendarDate) -> bool {
        self.contains(&date)
    }
}

impl EntryLookup for BTreeSet<CalendarDate> {
    fn has_entry(&self, date: CalendarDate) -> bool {
        self.contains(&date)
    }
}

/// Adapts a predicate closure into an [`EntryLookup`].
pub struct FnEntryLookup<F>(pub F);

impl<F> EntryLookup for FnEntryLookup<F>
where
    F: Fn(CalendarDate) -> bool,
{
    fn has_entry(&self, date: CalendarDate) -> bool {
        (self.0)(date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedDay<'a> {
    pub cell: &'a DayCell,
    pub has_entry: bool,
}

/// Pair every cell with its entry marker. Padding cells are never marked.
pub fn annotate<'a>(grid: &'a MonthGrid, lookup: &dyn EntryLookup) -> Vec<AnnotatedDay<'a>> {
    grid.cells()
        .iter()
        .map(|cell| AnnotatedDay {
            cell,
            has_entry: cell.date.is_some_and(|date| lookup.has_entry(date)),
        })
        .collect()
}
