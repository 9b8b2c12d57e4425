//! Calendar layout engine.
//!
//! Builds the padded month grid, selects the shifts visible in it and packs
//! them into lanes so they can be drawn as horizontal bars without collision.
//! Everything here is a pure function of its inputs and is recomputed on every
//! month change or filter toggle.

mod filter;
mod geometry;
mod grid;
mod lanes;

pub use filter::{DepartmentFilter, filter_intervals, highlighted_multi_day};
pub use geometry::{BarGeometry, LayoutMetrics, PERCENT_PRECISION};
pub use grid::{DAYS_PER_WEEK, LAST_COLUMN, MonthCursor, MonthGrid, WeekRow, compute_grid};
pub use lanes::{LanePlacement, layout_month, layout_week, lanes_per_week};
