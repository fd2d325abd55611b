//! Translates scroll-settle and jump signals into window moves.
//!
//! The surface always shows three pages. After every move the surface is told
//! to snap back to the middle page without animation, so the user only ever
//! sees the window's contents change.

use crate::models::calendar::{CalendarDate, CalendarError};

use super::window::{Direction, MonthWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Previous = 0,
    Current = 1,
    Next = 2,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Previous, Page::Current, Page::Next];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Page {
    type Error = CalendarError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Page::Previous),
            1 => Ok(Page::Current),
            2 => Ok(Page::Next),
            other => Err(CalendarError::InvalidPage(other)),
        }
    }
}

/// Instruction for the scrolling surface after the window moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingCommand {
    /// Snap to the middle page, no animation
    Recenter,
    /// Reload all three pages, then snap to the middle page, no animation
    ReloadAndRecenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub current: CalendarDate,
    pub command: PagingCommand,
}

#[derive(Debug, Clone)]
pub struct PagingController {
    window: MonthWindow,
}

impl PagingController {
    pub fn new(window: MonthWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// Scrolling stopped on `page`. Settling on the middle page is a no-op.
    pub fn settle(&mut self, page: Page) -> Option<Transition> {
        let direction = match page {
            Page::Current => return None,
            Page::Previous => Direction::Backward,
            Page::Next => Direction::Forward,
        };

        if !self.window.advance(direction) {
            return None;
        }

        log::debug!("Paged {:?} to {}", direction, self.window.current());
        Some(Transition {
            current: self.window.current(),
            command: PagingCommand::Recenter,
        })
    }

    /// Re-anchor on the month containing `date`.
    pub fn jump_to(&mut self, date: CalendarDate) -> Option<Transition> {
        if !self.window.anchor(date) {
            return None;
        }

        log::debug!("Jumped to {} (window {})", date, self.window.current());
        Some(Transition {
            current: self.window.current(),
            command: PagingCommand::ReloadAndRecenter,
        })
    }
}

/// Page the surface has come to rest on, from a raw scroll offset along the
/// paging axis and the extent of one page.
pub fn page_for_offset(offset: f64, page_extent: f64) -> Option<Page> {
    if !offset.is_finite() || !page_extent.is_finite() || page_extent <= 0.0 {
        return None;
    }
    let index = (offset / page_extent).round().clamp(0.0, 2.0);
    Page::try_from(index as usize).ok()
}
