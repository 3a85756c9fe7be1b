//! Month grid and day selection.
//!
//! Every date shown or keyed here is first normalized to a fixed UTC offset,
//! so "today" and the keys handed to the event store agree no matter which
//! timezone the host runs in.

use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};

use crate::models::date_key::DateKey;
use crate::utils::date::{
    days_in_month, first_of_month, first_weekday_of_month, fixed_offset,
    normalize_to_fixed_offset, shift_month, Clock, DateError,
};

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Day slots for a month: leading `None` padding so day 1 lands in its
/// weekday column, then `Some(1)..=Some(days)`. No trailing padding.
pub fn build_grid(year: i32, month0: u32) -> Result<Vec<Option<u32>>, DateError> {
    let padding = first_weekday_of_month(year, month0)? as usize;
    let days = days_in_month(year, month0)?;

    let mut cells = vec![None; padding];
    cells.extend((1..=days).map(Some));
    Ok(cells)
}

/// Key for a day of the displayed month.
///
/// The date is anchored at local midnight under the fixed offset and read
/// back through the same normalization used for "today".
pub fn date_key_for(
    year: i32,
    month0: u32,
    day: u32,
    offset_minutes: i32,
) -> Result<DateKey, DateError> {
    first_of_month(year, month0)?;
    let date = NaiveDate::from_ymd_opt(year, month0 + 1, day)
        .ok_or(DateError::InvalidDay { year, month0, day })?;

    let offset = fixed_offset(offset_minutes)?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .and_then(|local| offset.from_local_datetime(&local).single())
        .ok_or(DateError::OutOfRange)?;
    let local = normalize_to_fixed_offset(midnight.with_timezone(&Utc), offset_minutes)?;

    Ok(DateKey::new(local.date()))
}

/// One slot of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: Option<u32>,
    pub weekday: Weekday,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// Navigable month view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    offset_minutes: i32,
    today: NaiveDate,
    year: i32,
    month0: u32,
    selected: Option<u32>,
}

impl CalendarGrid {
    /// Start on the current month as seen at the fixed offset
    pub fn new(clock: &dyn Clock, offset_minutes: i32) -> Result<Self, DateError> {
        let today = normalize_to_fixed_offset(clock.now(), offset_minutes)?.date();

        Ok(Self {
            offset_minutes,
            today,
            year: today.year(),
            month0: today.month0(),
            selected: None,
        })
    }

    /// Start on a specific month, keeping `clock` for today's highlight
    pub fn at_month(
        clock: &dyn Clock,
        offset_minutes: i32,
        year: i32,
        month0: u32,
    ) -> Result<Self, DateError> {
        first_of_month(year, month0)?;
        let mut grid = Self::new(clock, offset_minutes)?;
        grid.year = year;
        grid.month0 = month0;
        Ok(grid)
    }

    /// Displayed `(year, month0)`
    pub fn displayed(&self) -> (i32, u32) {
        (self.year, self.month0)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn previous_month(&mut self) {
        self.shift(-1);
    }

    pub fn next_month(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, delta: i32) {
        let (year, month0) = shift_month(self.year, self.month0, delta);
        self.year = year;
        self.month0 = month0;
        self.selected = None;
    }

    /// Month name and year, e.g. "October 2026"
    pub fn title(&self) -> Result<String, DateError> {
        Ok(first_of_month(self.year, self.month0)?
            .format("%B %Y")
            .to_string())
    }

    /// Select a day of the displayed month and return its key
    pub fn select(&mut self, day: u32) -> Result<DateKey, DateError> {
        let key = date_key_for(self.year, self.month0, day, self.offset_minutes)?;
        self.selected = Some(day);
        Ok(key)
    }

    fn is_today(&self, day: u32) -> bool {
        self.today.year() == self.year && self.today.month0() == self.month0 && self.today.day() == day
    }

    /// All slots of the displayed month, annotated for rendering
    pub fn cells(&self) -> Result<Vec<DayCell>, DateError> {
        let cells = build_grid(self.year, self.month0)?
            .into_iter()
            .enumerate()
            .map(|(index, day)| DayCell {
                day,
                weekday: weekday_for_column(index % 7),
                is_today: day.map_or(false, |d| self.is_today(d)),
                is_selected: day.is_some() && day == self.selected,
            })
            .collect();

        Ok(cells)
    }

    /// Cells split into rows of seven; the last row may be shorter
    pub fn weeks(&self) -> Result<Vec<Vec<DayCell>>, DateError> {
        Ok(self
            .cells()?
            .chunks(7)
            .map(|week| week.to_vec())
            .collect())
    }
}

fn weekday_for_column(column: usize) -> Weekday {
    match column {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
