//! Bar positions for drawing placements over a seven-column week row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::grid::DAYS_PER_WEEK;
use super::lanes::LanePlacement;

/// Decimal places kept in percentage values.
pub const PERCENT_PRECISION: u32 = 4;

/// Fixed pixel measurements of the calendar bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Distance from the top of the week row to lane 0, leaving room for the day number.
    #[serde(default = "default_base_offset")]
    pub base_offset_px: u32,
    /// Vertical distance between consecutive lanes.
    #[serde(default = "default_lane_height")]
    pub lane_height_px: u32,
    /// Height of one bar.
    #[serde(default = "default_bar_height")]
    pub bar_height_px: u32,
}

fn default_base_offset() -> u32 {
    30
}

fn default_lane_height() -> u32 {
    20
}

fn default_bar_height() -> u32 {
    18
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            base_offset_px: default_base_offset(),
            lane_height_px: default_lane_height(),
            bar_height_px: default_bar_height(),
        }
    }
}

/// Absolute position of one bar inside its week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarGeometry {
    /// Left edge as a percentage of the row width.
    pub left_percent: Decimal,
    /// Width as a percentage of the row width.
    pub width_percent: Decimal,
    /// Top edge in pixels from the top of the row.
    pub top_px: u32,
    /// Bar height in pixels.
    pub height_px: u32,
}

impl BarGeometry {
    /// Computes the bar for `placement`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::layout::{layout_week, BarGeometry, LayoutMetrics, WeekRow};
    /// use shift_calendar::models::ShiftInterval;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
    /// let week = WeekRow::starting(0, d(12));
    /// let shift = ShiftInterval::new("s", d(12), d(18), "icu", ()).unwrap();
    /// let placements = layout_week(&week, &[&shift]);
    ///
    /// let bar = BarGeometry::for_placement(&placements[0], &LayoutMetrics::default());
    /// assert_eq!(bar.left_percent, Decimal::ZERO);
    /// assert_eq!(bar.width_percent, Decimal::ONE_HUNDRED);
    /// assert_eq!(bar.top_px, 30);
    /// ```
    pub fn for_placement<T>(placement: &LanePlacement<'_, T>, metrics: &LayoutMetrics) -> Self {
        let lane = u32::try_from(placement.lane).unwrap_or(u32::MAX);
        Self {
            left_percent: column_percent(placement.start_column),
            width_percent: column_percent(placement.span),
            top_px: metrics
                .base_offset_px
                .saturating_add(lane.saturating_mul(metrics.lane_height_px)),
            height_px: metrics.bar_height_px,
        }
    }
}

/// `columns / 7 * 100`, rounded to [`PERCENT_PRECISION`] places.
fn column_percent(columns: usize) -> Decimal {
    (Decimal::from(columns) * Decimal::ONE_HUNDRED / Decimal::from(DAYS_PER_WEEK))
        .round_dp(PERCENT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_week, WeekRow};
    use crate::models::ShiftInterval;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_column_percentages() {
        assert_eq!(column_percent(0), Decimal::ZERO);
        assert_eq!(column_percent(1), dec("14.2857"));
        assert_eq!(column_percent(2), dec("28.5714"));
        assert_eq!(column_percent(3), dec("42.8571"));
        assert_eq!(column_percent(7), dec("100"));
    }

    #[test]
    fn test_second_lane_is_offset_by_lane_height() {
        let week = WeekRow::starting(0, make_date("2025-01-12"));
        let a = ShiftInterval::new("a", make_date("2025-01-15"), make_date("2025-01-15"), "d", ())
            .unwrap();
        let b = ShiftInterval::new("b", make_date("2025-01-15"), make_date("2025-01-17"), "d", ())
            .unwrap();
        let placements = layout_week(&week, &[&a, &b]);
        let metrics = LayoutMetrics::default();

        let second = BarGeometry::for_placement(&placements[1], &metrics);
        assert_eq!(second.top_px, 50);
        assert_eq!(second.height_px, 18);
        assert_eq!(second.left_percent, dec("42.8571"));
        assert_eq!(second.width_percent, dec("42.8571"));
    }

    #[test]
    fn test_metrics_defaults_fill_missing_fields() {
        let metrics: LayoutMetrics = serde_yaml::from_str("lane_height_px: 24").unwrap();
        assert_eq!(metrics.base_offset_px, 30);
        assert_eq!(metrics.lane_height_px, 24);
        assert_eq!(metrics.bar_height_px, 18);
    }
}
