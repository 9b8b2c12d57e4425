//! Month view assembly: backend records in, positioned calendar bars out.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::config::CalendarSettings;
use crate::error::EngineResult;
use crate::layout::{
    BarGeometry, DepartmentFilter, MonthGrid, compute_grid, filter_intervals,
    highlighted_multi_day, lanes_per_week, layout_month,
};
use crate::models::{ShiftInterval, ShiftRecord};

/// One shift bar within one week row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarBar {
    /// The shift being drawn.
    pub shift: ShiftRecord,
    /// Index of the week row.
    pub week: usize,
    /// Column of the first visible day.
    pub start_column: usize,
    /// Column of the last visible day.
    pub end_column: usize,
    /// Vertical stacking slot.
    pub lane: usize,
    /// Columns covered.
    pub span: usize,
    /// Position inside the week row.
    pub geometry: BarGeometry,
    /// Colour of the owning department, if it still exists.
    pub color: Option<String>,
}

/// Everything needed to draw one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    /// The padded month grid.
    pub grid: MonthGrid,
    /// Positioned bars, week by week.
    pub bars: Vec<CalendarBar>,
    /// Lanes used per week, for sizing the rows.
    pub lanes_per_week: Vec<usize>,
    /// Multi-day shifts featured below the calendar.
    pub highlights: Vec<ShiftRecord>,
}

/// Builds the month view for the month containing `anchor`.
///
/// Shift records with an end date before their start date are logged and left
/// out; the rest of the month still renders.
pub fn build_month_view(
    backend: &dyn Backend,
    anchor: NaiveDate,
    filter: &DepartmentFilter,
    settings: &CalendarSettings,
) -> EngineResult<MonthView> {
    let grid = compute_grid(anchor);
    let visible_range = grid.visible_range();

    let intervals: Vec<ShiftInterval<ShiftRecord>> = backend
        .shifts_between(visible_range)?
        .into_iter()
        .filter_map(|record| match ShiftInterval::try_from(record) {
            Ok(interval) => Some(interval),
            Err(err) => {
                warn!(error = %err, "Skipping invalid shift record");
                None
            }
        })
        .collect();

    let colors: HashMap<String, String> = backend
        .departments()?
        .into_iter()
        .map(|department| (department.id, department.color))
        .collect();

    let visible = filter_intervals(&intervals, visible_range, filter);
    let placements = layout_month(&grid, &visible);
    let lanes = lanes_per_week(&grid, &placements);

    let bars = placements
        .iter()
        .map(|placement| CalendarBar {
            shift: placement.interval.payload.clone(),
            week: placement.week,
            start_column: placement.start_column,
            end_column: placement.end_column,
            lane: placement.lane,
            span: placement.span,
            geometry: BarGeometry::for_placement(placement, &settings.layout),
            color: colors.get(&placement.interval.department_id).cloned(),
        })
        .collect::<Vec<_>>();

    let highlights = highlighted_multi_day(&visible, settings.highlight_limit)
        .into_iter()
        .map(|interval| interval.payload.clone())
        .collect();

    debug!(
        year = grid.year,
        month = grid.month,
        fetched = intervals.len(),
        visible = visible.len(),
        bars = bars.len(),
        "Built month view"
    );

    Ok(MonthView {
        grid,
        bars,
        lanes_per_week: lanes,
        highlights,
    })
}
