// Calendar engine services
// Grid building, weekday labels, the rolling month window and paging

pub mod clock;
pub mod engine;
pub mod entries;
pub mod grid;
pub mod paging;
pub mod weekday;
pub mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{CalendarEngine, EngineOptions, MonthChanged, MonthObserver, WindowGrids};
pub use entries::{annotate, AnnotatedDay, EntryLookup, FnEntryLookup};
pub use grid::{build_grid, build_grid_at};
pub use paging::{page_for_offset, Page, PagingCommand, PagingController, Transition};
pub use weekday::{month_label, saturday_index, sunday_index, weekday_symbols};
pub use window::{Direction, MonthWindow};
