// Mood Calendar
// Terminal preview of the month pager: prints the current page and reads
// paging commands from stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use mood_calendar::models::calendar::{CalendarDate, DayCellOwnership, MonthGrid};
use mood_calendar::services::calendar::{
    saturday_index, sunday_index, CalendarEngine, EngineOptions, MonthChanged, Page, SystemClock,
};
use mood_calendar::services::settings::{settings_to_bounds, settings_to_config, SettingsService};

const HELP: &str = "commands: n (next), p (previous), t (today), g YYYY-MM-DD (go to), \
s YYYY-MM-DD (select), j (json), q (quit)";

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Mood Calendar preview");

    let settings_service = SettingsService::at_default_location();
    let settings = settings_service.get()?;
    let config = settings_to_config(&settings);
    let options = EngineOptions {
        selection: None,
        bounds: settings_to_bounds(&settings),
    };

    let mut engine = match std::env::args().nth(1) {
        Some(arg) => {
            let initial: CalendarDate = arg
                .parse()
                .with_context(|| format!("Expected a YYYY-MM-DD start date, got '{}'", arg))?;
            CalendarEngine::new(config, initial, options)?
        }
        None => CalendarEngine::starting_today(config, options, Box::new(SystemClock))?,
    };

    engine.subscribe(|change: &MonthChanged| {
        log::info!("Month changed to {} ({})", change.label, change.current);
    });

    print_page(&engine, &mut io::stdout().lock()).context("Failed to print calendar page")?;
    println!("{}", HELP);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(cmd) => cmd,
            None => continue,
        };

        let result = match command {
            "n" => engine.on_page_settled(Page::Next),
            "p" => engine.on_page_settled(Page::Previous),
            "t" => engine.jump_to_today(),
            "g" | "s" => {
                let Some(date) = parts.next().and_then(|arg| arg.parse::<CalendarDate>().ok()) else {
                    println!("expected a date like 2025-01-15");
                    continue;
                };
                if command == "g" {
                    engine.jump_to(date)
                } else {
                    let current = engine.grids_for_window().page(Page::Current);
                    let ownership = ownership_in_current_page(current, date);
                    engine.on_date_tapped(date, ownership)
                }
            }
            "j" => {
                let json = serde_json::to_string_pretty(&engine.grids_for_window().current)
                    .context("Failed to serialize grid")?;
                println!("{}", json);
                continue;
            }
            "q" => break,
            _ => {
                println!("{}", HELP);
                continue;
            }
        };

        if let Some(command) = result {
            log::debug!("Surface command: {:?}", command);
        }
        print_page(&engine, &mut io::stdout().lock()).context("Failed to print calendar page")?;
    }

    Ok(())
}

fn ownership_in_current_page(grid: &MonthGrid, date: CalendarDate) -> DayCellOwnership {
    grid.cell_for(date)
        .map(|cell| cell.ownership)
        .unwrap_or_else(|| {
            if date < grid.month() {
                DayCellOwnership::PreviousMonth
            } else if date.same_month(&grid.month()) {
                DayCellOwnership::CurrentMonth
            } else {
                DayCellOwnership::NextMonth
            }
        })
}

fn print_page(engine: &CalendarEngine, out: &mut impl Write) -> io::Result<()> {
    let config = engine.config();
    let weekend = [sunday_index(config), saturday_index(config)];

    writeln!(out, "\n{:^28}", engine.current_month_label())?;
    for (idx, symbol) in engine.weekday_symbols().iter().enumerate() {
        let short: String = symbol.chars().take(3).collect();
        let marker = if weekend.contains(&idx) { "*" } else { " " };
        write!(out, "{:>3}{}", short, marker)?;
    }
    writeln!(out)?;

    for week in engine.grids_for_window().current.weeks() {
        for cell in week {
            let text = match cell.day_number() {
                Some(day) => format!("{:>3}", day),
                None => "  .".to_string(),
            };
            let marker = if cell.is_selected {
                "<"
            } else if cell.is_today {
                "*"
            } else if !cell.is_enabled {
                "x"
            } else if cell.ownership != DayCellOwnership::CurrentMonth {
                "'"
            } else {
                " "
            };
            write!(out, "{}{}", text, marker)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
