// Property-based tests for grid construction, weekday rotation and the month window

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::configs;
use mood_calendar::models::calendar::{
    CalendarDate, DateBounds, DayCellOwnership, GridPolicy,
};
use mood_calendar::services::calendar::{
    build_grid, saturday_index, sunday_index, weekday_symbols, Direction, MonthWindow, Page,
    PagingController,
};
use proptest::prelude::*;

const CANONICAL: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn policy() -> impl Strategy<Value = GridPolicy> {
    prop_oneof![Just(GridPolicy::CompleteWeeks), Just(GridPolicy::SixWeeks)]
}

fn date() -> impl Strategy<Value = CalendarDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_filter_map("valid date", |(y, m, d)| {
        CalendarDate::from_ymd(y, m, d)
    })
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Forward,
    Backward,
    Anchor(CalendarDate),
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(Move::Forward),
            3 => Just(Move::Backward),
            1 => date().prop_map(Move::Anchor),
        ],
        0..60,
    )
}

fn assert_spacing(window: &MonthWindow) -> Result<(), TestCaseError> {
    prop_assert_eq!(window.previous().add_months(1), Some(window.current()));
    prop_assert_eq!(window.current().add_months(1), Some(window.next()));
    prop_assert!(window.months().iter().all(|m| m.is_first_of_month()));
    Ok(())
}

proptest! {
    /// Every grid is whole weeks and covers day 1 through the last day of its month
    #[test]
    fn prop_grid_complete(month in date(), first in 1..=7u8, policy in policy()) {
        let config = configs::with(first, policy);
        let grid = build_grid(month, &config, None, &DateBounds::unbounded(), month);

        prop_assert_eq!(grid.len() % 7, 0);
        if policy == GridPolicy::SixWeeks {
            prop_assert_eq!(grid.len(), 42);
        } else {
            prop_assert!(grid.len() - grid.current_month_cells().count() - grid.leading_filler_count() < 7);
        }

        let current: Vec<CalendarDate> = grid.current_month_cells().filter_map(|c| c.date).collect();
        prop_assert_eq!(current.first().copied(), Some(month.first_of_month()));
        prop_assert_eq!(current.last().copied(), Some(month.last_of_month()));
        prop_assert_eq!(current.len() as u32, month.days_in_month());
    }

    /// Rows start on the configured weekday and dates run consecutively
    #[test]
    fn prop_grid_rows_aligned(month in date(), first in 1..=7u8, policy in policy()) {
        let config = configs::with(first, policy);
        let grid = build_grid(month, &config, None, &DateBounds::unbounded(), month);
        let first_weekday = config.first_weekday().weekday();

        for week in grid.weeks() {
            prop_assert_eq!(week[0].date.map(|d| d.weekday()), Some(first_weekday));
        }
        for pair in grid.cells().windows(2) {
            prop_assert_eq!(pair[0].date.and_then(|d| d.succ()), pair[1].date);
        }
        let ownerships: Vec<DayCellOwnership> = grid.cells().iter().map(|c| c.ownership).collect();
        let mut sorted = ownerships.clone();
        sorted.sort_by_key(|o| match o {
            DayCellOwnership::PreviousMonth => 0,
            DayCellOwnership::CurrentMonth => 1,
            DayCellOwnership::NextMonth => 2,
        });
        prop_assert_eq!(ownerships, sorted);
    }

    /// Index 0 is always the configured first weekday
    #[test]
    fn prop_rotation(first in 1..=7u8) {
        let config = configs::with(first, GridPolicy::CompleteWeeks);
        let symbols = weekday_symbols(&config);
        prop_assert_eq!(symbols.len(), 7);
        prop_assert_eq!(symbols[0].as_str(), CANONICAL[first as usize - 1]);
        prop_assert_eq!(symbols[sunday_index(&config)].as_str(), "Sun");
        prop_assert_eq!(symbols[saturday_index(&config)].as_str(), "Sat");
    }

    /// Anchors stay exactly one month apart after any mix of moves
    #[test]
    fn prop_window_invariant(start in date(), script in moves()) {
        let mut window = MonthWindow::anchored(start).unwrap();
        assert_spacing(&window)?;
        for step in script {
            match step {
                Move::Forward => { window.advance(Direction::Forward); }
                Move::Backward => { window.advance(Direction::Backward); }
                Move::Anchor(date) => {
                    window.anchor(date);
                    prop_assert_eq!(window.current(), date.first_of_month());
                }
            }
            assert_spacing(&window)?;
        }
    }

    /// Settling on the middle page never moves the window
    #[test]
    fn prop_settle_current_idempotent(start in date(), repeats in 1..50usize) {
        let mut paging = PagingController::new(MonthWindow::anchored(start).unwrap());
        let before = *paging.window();
        for _ in 0..repeats {
            prop_assert!(paging.settle(Page::Current).is_none());
        }
        prop_assert_eq!(*paging.window(), before);
    }

    /// Moving "today" to the next day flips exactly the old and new today cells
    #[test]
    fn prop_today_recomputed(today in date(), first in 1..=7u8) {
        let tomorrow = today.succ().unwrap();
        let config = configs::with(first, GridPolicy::SixWeeks);
        let bounds = DateBounds::unbounded();
        let month = today.first_of_month();
        let before = build_grid(month, &config, None, &bounds, today);
        let after = build_grid(month, &config, None, &bounds, tomorrow);

        let flipped: Vec<CalendarDate> = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(a, b)| a.is_today != b.is_today)
            .filter_map(|(a, _)| a.date)
            .collect();
        prop_assert!(flipped.contains(&today));
        let expected = if after.cell_for(tomorrow).is_some() { 2 } else { 1 };
        prop_assert_eq!(flipped.len(), expected);
    }
}
