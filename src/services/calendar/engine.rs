//! Calendar engine façade.
//!
//! Owns the config, the rolling window, the selection and the three cached
//! grid snapshots. Every window move rebuilds the grids, then notifies
//! observers, then hands the recenter command back to the caller, so the
//! surface never recenters against stale pages.

use crate::models::calendar::{
    CalendarConfig, CalendarDate, CalendarError, DateBounds, DayCellOwnership, MonthGrid,
};

use super::clock::{Clock, SystemClock};
use super::grid::build_grid;
use super::paging::{Page, PagingCommand, PagingController, Transition};
use super::weekday;
use super::window::MonthWindow;

/// Fired once per window move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthChanged {
    pub current: CalendarDate,
    pub label: String,
}

pub type MonthObserver = Box<dyn FnMut(&MonthChanged)>;

/// Grid snapshots for the three pages, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowGrids {
    pub previous: MonthGrid,
    pub current: MonthGrid,
    pub next: MonthGrid,
}

impl WindowGrids {
    pub fn page(&self, page: Page) -> &MonthGrid {
        match page {
            Page::Previous => &self.previous,
            Page::Current => &self.current,
            Page::Next => &self.next,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthGrid> {
        [&self.previous, &self.current, &self.next].into_iter()
    }
}

/// Construction-time state beyond the config.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub selection: Option<CalendarDate>,
    pub bounds: DateBounds,
}

pub struct CalendarEngine {
    config: CalendarConfig,
    paging: PagingController,
    selection: Option<CalendarDate>,
    bounds: DateBounds,
    clock: Box<dyn Clock>,
    grids: WindowGrids,
    observers: Vec<MonthObserver>,
}

impl CalendarEngine {
    pub fn new(
        config: CalendarConfig,
        initial: CalendarDate,
        options: EngineOptions,
    ) -> Result<Self, CalendarError> {
        Self::with_clock(config, initial, options, Box::new(SystemClock))
    }

    /// Engine anchored on today's month in the config's time zone.
    pub fn starting_today(
        config: CalendarConfig,
        options: EngineOptions,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CalendarError> {
        let today = config.time_zone().local_date(&clock.now());
        Self::with_clock(config, today, options, clock)
    }

    pub fn with_clock(
        config: CalendarConfig,
        initial: CalendarDate,
        options: EngineOptions,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CalendarError> {
        let window = MonthWindow::anchored(initial)?;
        let today = config.time_zone().local_date(&clock.now());
        let grids = compute_grids(&window, &config, options.selection, &options.bounds, today);

        log::debug!(
            "Calendar engine anchored on {} (first weekday {}, {:?})",
            window.current(),
            config.first_weekday().get(),
            config.grid_policy()
        );

        Ok(Self {
            config,
            paging: PagingController::new(window),
            selection: options.selection,
            bounds: options.bounds,
            clock,
            grids,
            observers: Vec::new(),
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn window(&self) -> &MonthWindow {
        self.paging.window()
    }

    pub fn current_month(&self) -> CalendarDate {
        self.paging.window().current()
    }

    pub fn current_month_label(&self) -> String {
        weekday::month_label(self.current_month(), &self.config)
    }

    pub fn weekday_symbols(&self) -> Vec<String> {
        weekday::weekday_symbols(&self.config)
    }

    pub fn grids_for_window(&self) -> &WindowGrids {
        &self.grids
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn today(&self) -> CalendarDate {
        self.config.time_zone().local_date(&self.clock.now())
    }

    pub fn selection(&self) -> Option<CalendarDate> {
        self.selection
    }

    /// Set the selected day. Does not move the window.
    pub fn select(&mut self, date: CalendarDate) {
        if self.selection == Some(date) {
            return;
        }
        self.selection = Some(date);
        self.rebuild_grids();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.rebuild_grids();
        }
    }

    /// Register an observer for month changes.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&MonthChanged) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Scrolling came to rest on `page`.
    pub fn on_page_settled(&mut self, page: Page) -> Option<PagingCommand> {
        let transition = self.paging.settle(page)?;
        Some(self.apply(transition))
    }

    /// [`Self::on_page_settled`] for a raw page index from the surface.
    pub fn on_page_index_settled(
        &mut self,
        index: usize,
    ) -> Result<Option<PagingCommand>, CalendarError> {
        let page = Page::try_from(index)?;
        Ok(self.on_page_settled(page))
    }

    /// A day cell was tapped.
    ///
    /// Selects the day; a day from a neighbouring month also re-anchors the
    /// window on that month. Taps on disabled days are ignored.
    pub fn on_date_tapped(
        &mut self,
        date: CalendarDate,
        ownership: DayCellOwnership,
    ) -> Option<PagingCommand> {
        if !self.bounds.contains(date) {
            log::debug!("Ignoring tap on disabled day {}", date);
            return None;
        }

        self.select(date);
        match ownership {
            DayCellOwnership::CurrentMonth => None,
            DayCellOwnership::PreviousMonth | DayCellOwnership::NextMonth => self.jump_to(date),
        }
    }

    /// Re-anchor on the month containing `date`.
    pub fn jump_to(&mut self, date: CalendarDate) -> Option<PagingCommand> {
        let transition = self.paging.jump_to(date)?;
        Some(self.apply(transition))
    }

    pub fn jump_to_today(&mut self) -> Option<PagingCommand> {
        let today = self.today();
        self.jump_to(today)
    }

    /// Rebuild the grids without moving the window, e.g. after the app
    /// resumes past midnight.
    pub fn refresh(&mut self) {
        self.rebuild_grids();
    }

    fn apply(&mut self, transition: Transition) -> PagingCommand {
        self.rebuild_grids();

        let event = MonthChanged {
            current: transition.current,
            label: weekday::month_label(transition.current, &self.config),
        };
        for observer in self.observers.iter_mut() {
            observer(&event);
        }

        transition.command
    }

    fn rebuild_grids(&mut self) {
        let today = self.today();
        self.grids = compute_grids(
            self.paging.window(),
            &self.config,
            self.selection,
            &self.bounds,
            today,
        );
    }
}

fn compute_grids(
    window: &MonthWindow,
    config: &CalendarConfig,
    selection: Option<CalendarDate>,
    bounds: &DateBounds,
    today: CalendarDate,
) -> WindowGrids {
    let build = |month| build_grid(month, config, selection, bounds, today);
    WindowGrids {
        previous: build(window.previous()),
        current: build(window.current()),
        next: build(window.next()),
    }
}
