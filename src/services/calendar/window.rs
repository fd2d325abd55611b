//! Three-month rolling window backing the infinite month pager.

use crate::models::calendar::{CalendarDate, CalendarError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn months(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// `[previous, current, next]` month anchors, always exactly one month apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    previous: CalendarDate,
    current: CalendarDate,
    next: CalendarDate,
}

impl MonthWindow {
    /// Window centered on the month containing `date`.
    pub fn anchored(date: CalendarDate) -> Result<Self, CalendarError> {
        let current = date.first_of_month();
        let (Some(previous), Some(next)) = (current.add_months(-1), current.add_months(1)) else {
            return Err(CalendarError::OutOfRange(date.to_string()));
        };
        let window = Self {
            previous,
            current,
            next,
        };
        window.check_spacing();
        Ok(window)
    }

    /// Re-center on the month containing `date`. The only move larger than one month.
    ///
    /// Leaves the window untouched and returns `false` when the neighbours of
    /// `date`'s month can't be represented.
    pub fn anchor(&mut self, date: CalendarDate) -> bool {
        match Self::anchored(date) {
            Ok(window) => {
                *self = window;
                true
            }
            Err(err) => {
                log::warn!("Ignoring anchor request: {}", err);
                false
            }
        }
    }

    /// Slide by exactly one month.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let shifted = match direction {
            Direction::Forward => self.next.add_months(1).map(|next| Self {
                previous: self.current,
                current: self.next,
                next,
            }),
            Direction::Backward => self.previous.add_months(-1).map(|previous| Self {
                previous,
                current: self.previous,
                next: self.current,
            }),
        };

        match shifted {
            Some(window) => {
                *self = window;
                self.check_spacing();
                true
            }
            None => {
                log::warn!(
                    "Cannot move window {} month from {}",
                    direction.months(),
                    self.current
                );
                false
            }
        }
    }

    pub fn previous(&self) -> CalendarDate {
        self.previous
    }

    pub fn current(&self) -> CalendarDate {
        self.current
    }

    pub fn next(&self) -> CalendarDate {
        self.next
    }

    /// Anchors in page order.
    pub fn months(&self) -> [CalendarDate; 3] {
        [self.previous, self.current, self.next]
    }

    /// Whether `date` falls in one of the three windowed months.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.months().contains(&date.first_of_month())
    }

    fn check_spacing(&self) {
        debug_assert!(
            self.previous.add_months(1) == Some(self.current)
                && self.current.add_months(1) == Some(self.next),
            "month window anchors drifted: {:?}",
            self
        );
    }
}
