use std::fmt::Write;

use anyhow::Result;
use chrono::Datelike;
use day_planner::models::date_key::DateKey;
use day_planner::models::settings::Settings;
use day_planner::services::calendar::{CalendarGrid, DayCell, WEEKDAY_HEADERS};
use day_planner::utils::date::SystemClock;

const CELL_WIDTH: usize = 5;

pub fn run(
    settings: &Settings,
    year: Option<i32>,
    month0: Option<u32>,
    select: Option<u32>,
) -> Result<()> {
    let clock = SystemClock;
    let mut grid = CalendarGrid::new(&clock, settings.utc_offset_minutes)?;

    if year.is_some() || month0.is_some() {
        let (current_year, current_month0) = grid.displayed();
        grid = CalendarGrid::at_month(
            &clock,
            settings.utc_offset_minutes,
            year.unwrap_or(current_year),
            month0.unwrap_or(current_month0),
        )?;
    }

    let selected = select.map(|day| grid.select(day)).transpose()?;

    print!("{}", render(&grid)?);
    if let Some(key) = selected {
        println!("\nSelected {}", key);
    }

    Ok(())
}

/// Show the month that contains `date`, with that day selected.
pub fn run_for_date(settings: &Settings, date: DateKey) -> Result<()> {
    let (year, month0) = date.month_position();
    let mut grid =
        CalendarGrid::at_month(&SystemClock, settings.utc_offset_minutes, year, month0)?;
    grid.select(date.date().day())?;

    print!("{}", render(&grid)?);
    Ok(())
}

/// Plain-text month grid. Today is wrapped in brackets, the selected day
/// in angle brackets.
pub fn render(grid: &CalendarGrid) -> Result<String> {
    let mut out = String::new();
    let width = CELL_WIDTH * 7;

    writeln!(out, "{:^width$}", grid.title()?, width = width)?;
    for header in WEEKDAY_HEADERS {
        write!(out, "{:>width$}", header, width = CELL_WIDTH)?;
    }
    writeln!(out)?;

    for week in grid.weeks()? {
        for cell in &week {
            write!(out, "{:>width$}", render_cell(cell), width = CELL_WIDTH)?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn render_cell(cell: &DayCell) -> String {
    match cell.day {
        None => String::new(),
        Some(day) if cell.is_selected => format!("<{}>", day),
        Some(day) if cell.is_today => format!("[{}]", day),
        Some(day) => day.to_string(),
    }
}
