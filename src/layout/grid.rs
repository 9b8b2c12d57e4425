//! Month grid construction.
//!
//! A month view always shows whole Sunday-first weeks: the grid starts on the
//! Sunday on or before the 1st and ends on the Saturday on or after the last
//! day of the month, giving between four and six [`WeekRow`]s.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::models::{DateRange, ShiftInterval};

/// Number of columns in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Index of the last column in a week row (Saturday).
pub const LAST_COLUMN: usize = DAYS_PER_WEEK - 1;

/// Seven consecutive days, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    /// Position of the week in the grid, oldest first.
    pub index: usize,
    /// The days of the week, increasing by one day except where clamped at the
    /// ends of the representable calendar.
    pub days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekRow {
    /// Builds the seven-day row beginning on `first_day`.
    ///
    /// [`compute_grid`] always passes a Sunday. Days past the last
    /// representable date repeat it.
    pub fn starting(index: usize, first_day: NaiveDate) -> Self {
        Self {
            index,
            days: std::array::from_fn(|offset| offset_date(first_day, offset as i64)),
        }
    }

    /// The first day of the row.
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    /// The last day of the row.
    pub fn last_day(&self) -> NaiveDate {
        self.days[LAST_COLUMN]
    }

    /// The week as an inclusive range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.first_day(), self.last_day())
    }

    /// Returns true if at least one day of the week falls inside `interval`.
    pub fn touches<T>(&self, interval: &ShiftInterval<T>) -> bool {
        self.days.iter().any(|day| interval.contains(*day))
    }

    /// Column of the first day on or after the interval start.
    ///
    /// An interval that started before this week lands on column 0.
    pub fn start_column<T>(&self, interval: &ShiftInterval<T>) -> usize {
        self.days
            .iter()
            .position(|day| *day >= interval.start)
            .unwrap_or(0)
    }

    /// Column of the first day on or after the interval end.
    ///
    /// An interval that runs past Saturday lands on the last column.
    pub fn end_column<T>(&self, interval: &ShiftInterval<T>) -> usize {
        self.days
            .iter()
            .position(|day| *day >= interval.end)
            .unwrap_or(LAST_COLUMN)
    }
}

/// The padded grid of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Year of the anchor month.
    pub year: i32,
    /// Anchor month, 1-based.
    pub month: u32,
    /// Whole weeks covering the month, oldest first.
    pub weeks: Vec<WeekRow>,
    range: DateRange,
}

impl MonthGrid {
    /// First to last visible day, padding included.
    pub fn visible_range(&self) -> DateRange {
        self.range
    }

    /// Returns true if `date` belongs to the anchor month rather than the padding.
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Iterates over every visible day in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flat_map(|week| week.days.iter().copied())
    }
}

/// Computes the padded month grid for the month containing `month_anchor`.
///
/// Only the year and month of the anchor are used.
///
/// # Example
///
/// ```
/// use shift_calendar::layout::compute_grid;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// // January 2025 starts on a Wednesday and ends on a Friday.
/// let grid = compute_grid(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
/// assert_eq!(grid.weeks.len(), 5);
/// assert_eq!(grid.visible_range().start, NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
/// assert_eq!(grid.visible_range().end, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// assert_eq!(grid.visible_range().start.weekday(), Weekday::Sun);
/// ```
pub fn compute_grid(month_anchor: NaiveDate) -> MonthGrid {
    let first = first_of_month(month_anchor);
    let month_len = days_in_month(first.year(), first.month()) as usize;
    let lead = first.weekday().num_days_from_sunday() as usize;
    let week_count = (lead + month_len).div_ceil(DAYS_PER_WEEK);

    // Offsets are relative to the 1st so padding saturates at the calendar edges
    // while real days keep their columns.
    let weeks: Vec<WeekRow> = (0..week_count)
        .map(|index| WeekRow {
            index,
            days: std::array::from_fn(|column| {
                let offset = (index * DAYS_PER_WEEK + column) as i64 - lead as i64;
                offset_date(first, offset)
            }),
        })
        .collect();

    let grid_start = weeks.first().map_or(first, WeekRow::first_day);
    let grid_end = weeks.last().map_or(first, WeekRow::last_day);

    MonthGrid {
        year: first.year(),
        month: first.month(),
        weeks,
        range: DateRange::new(grid_start, grid_end),
    }
}

/// Steps through months, always anchored on the 1st.
///
/// Anchoring on the 1st means stepping forward from January 31 lands in
/// February, never March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: first_of_month(date),
        }
    }

    /// The 1st of the current month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The following month, or the current one if it is the last representable month.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, Self::containing)
    }

    /// The preceding month, or the current one if it is the first representable month.
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_days(Days::new(1))
            .map_or(*self, Self::containing)
    }

    /// The grid for the current month.
    pub fn grid(&self) -> MonthGrid {
        compute_grid(self.first)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `date` shifted by `offset` days, clamped to the representable range.
fn offset_date(date: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        date.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    } else {
        date.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
