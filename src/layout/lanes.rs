//! First-fit lane packing of intervals within a week row.
//!
//! Intervals are placed in the order they are supplied: each one goes into
//! the first lane where it overlaps no occupant, or opens a new lane. Overlap
//! is judged on the full interval bounds, not on the part visible in the
//! week. Every week is packed independently, so an interval spanning several
//! weeks may sit in different lanes from one week to the next.
//!
//! The result is not lane-count optimal. Per-week shift volume is small and
//! keeping the supplied order matters more than the tightest packing.

use serde::Serialize;
use tracing::debug;

use crate::models::ShiftInterval;

use super::grid::{MonthGrid, WeekRow};

/// Where one interval is drawn within one week row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanePlacement<'a, T> {
    /// The interval being placed.
    pub interval: &'a ShiftInterval<T>,
    /// Index of the week row.
    pub week: usize,
    /// Column of the first visible day, 0 to 6.
    pub start_column: usize,
    /// Column of the last visible day, 0 to 6.
    pub end_column: usize,
    /// Vertical stacking slot within the week.
    pub lane: usize,
    /// Number of columns covered: `end_column - start_column + 1`.
    pub span: usize,
}

/// Packs the intervals touching `week` into non-overlapping lanes.
///
/// Intervals that do not touch the week are ignored. Placements are returned
/// lane by lane, each lane in insertion order.
///
/// # Example
///
/// ```
/// use shift_calendar::layout::{layout_week, WeekRow};
/// use shift_calendar::models::ShiftInterval;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let week = WeekRow::starting(0, d(13));
/// let x = ShiftInterval::new("x", d(15), d(17), "icu", ()).unwrap();
/// let y = ShiftInterval::new("y", d(16), d(16), "icu", ()).unwrap();
///
/// let placements = layout_week(&week, &[&x, &y]);
/// assert_eq!((placements[0].lane, placements[0].start_column, placements[0].end_column), (0, 2, 4));
/// assert_eq!((placements[1].lane, placements[1].start_column, placements[1].end_column), (1, 3, 3));
/// ```
pub fn layout_week<'a, T>(
    week: &WeekRow,
    intervals: &[&'a ShiftInterval<T>],
) -> Vec<LanePlacement<'a, T>> {
    let mut lanes: Vec<Vec<&'a ShiftInterval<T>>> = Vec::new();

    for &interval in intervals.iter().filter(|interval| week.touches(**interval)) {
        let free_lane = lanes
            .iter_mut()
            .find(|lane| lane.iter().all(|occupant| !interval.overlaps(*occupant)));
        match free_lane {
            Some(lane) => lane.push(interval),
            None => lanes.push(vec![interval]),
        }
    }

    lanes
        .iter()
        .enumerate()
        .flat_map(|(lane_index, lane)| {
            lane.iter().map(move |&interval| {
                let start_column = week.start_column(interval);
                let end_column = week.end_column(interval);
                LanePlacement {
                    interval,
                    week: week.index,
                    start_column,
                    end_column,
                    lane: lane_index,
                    span: end_column - start_column + 1,
                }
            })
        })
        .collect()
}

/// Runs [`layout_week`] for every week of the grid.
pub fn layout_month<'a, T>(
    grid: &MonthGrid,
    intervals: &[&'a ShiftInterval<T>],
) -> Vec<LanePlacement<'a, T>> {
    let placements: Vec<LanePlacement<'a, T>> = grid
        .weeks
        .iter()
        .flat_map(|week| layout_week(week, intervals))
        .collect();

    debug!(
        year = grid.year,
        month = grid.month,
        intervals = intervals.len(),
        placements = placements.len(),
        "Laid out month grid"
    );

    placements
}

/// Number of lanes used in each week, indexed like `grid.weeks`.
pub fn lanes_per_week<T>(grid: &MonthGrid, placements: &[LanePlacement<'_, T>]) -> Vec<usize> {
    let mut counts = vec![0; grid.weeks.len()];
    for placement in placements {
        if let Some(count) = counts.get_mut(placement.week) {
            *count = (*count).max(placement.lane + 1);
        }
    }
    counts
}
