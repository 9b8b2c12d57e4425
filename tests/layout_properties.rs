//! Property tests for the month grid and lane packing.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use shift_calendar::layout::{
    DAYS_PER_WEEK, LAST_COLUMN, LanePlacement, compute_grid, layout_month, layout_week,
};
use shift_calendar::models::ShiftInterval;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
}

fn arb_anchor() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

/// Intervals within roughly three months of `base_date`, tagged by index.
fn arb_intervals() -> impl Strategy<Value = Vec<ShiftInterval<usize>>> {
    prop::collection::vec((0u64..90, 0u64..15), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (offset, length))| {
                let start = base_date() + Days::new(offset);
                let end = start + Days::new(length);
                ShiftInterval::new(format!("s{}", index), start, end, "icu", index).unwrap()
            })
            .collect()
    })
}

fn project(placements: &[LanePlacement<'_, usize>]) -> Vec<(usize, usize, usize, usize, usize)> {
    placements
        .iter()
        .map(|p| (p.interval.payload, p.week, p.start_column, p.end_column, p.lane))
        .collect()
}

proptest! {
    #[test]
    fn prop_grid_covers_whole_month(anchor in arb_anchor()) {
        let grid = compute_grid(anchor);

        prop_assert!((4..=6).contains(&grid.weeks.len()));
        prop_assert_eq!(grid.weeks[0].days[0].weekday(), Weekday::Sun);

        let days: Vec<NaiveDate> = grid.days().collect();
        prop_assert_eq!(days.len(), grid.weeks.len() * DAYS_PER_WEEK);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0] + Days::new(1), pair[1]);
        }

        let first = anchor.with_day(1).unwrap();
        prop_assert!(days.contains(&first));
        let in_month = days.iter().filter(|day| grid.in_month(**day)).count();
        let next_month = first.checked_add_months(chrono::Months::new(1)).unwrap();
        prop_assert_eq!(in_month as i64, (next_month - first).num_days());
    }

    #[test]
    fn prop_lanes_never_hold_overlapping_intervals(intervals in arb_intervals()) {
        let grid = compute_grid(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let refs: Vec<&ShiftInterval<usize>> = intervals.iter().collect();
        let placements = layout_month(&grid, &refs);

        for a in &placements {
            for b in &placements {
                if a.interval.payload == b.interval.payload || a.week != b.week || a.lane != b.lane {
                    continue;
                }
                prop_assert!(!a.interval.overlaps(b.interval));
            }
        }
    }

    #[test]
    fn prop_every_touching_interval_is_placed_once_per_week(intervals in arb_intervals()) {
        let grid = compute_grid(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let refs: Vec<&ShiftInterval<usize>> = intervals.iter().collect();

        for week in &grid.weeks {
            let placements = layout_week(week, &refs);
            for interval in &intervals {
                let count = placements
                    .iter()
                    .filter(|p| p.interval.payload == interval.payload)
                    .count();
                let expected = usize::from(week.touches(interval));
                prop_assert_eq!(count, expected);
            }
        }
    }

    #[test]
    fn prop_layout_is_deterministic(intervals in arb_intervals()) {
        let grid = compute_grid(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let refs: Vec<&ShiftInterval<usize>> = intervals.iter().collect();

        let first = project(&layout_month(&grid, &refs));
        let second = project(&layout_month(&grid, &refs));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_columns_stay_inside_the_week(intervals in arb_intervals()) {
        let grid = compute_grid(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let refs: Vec<&ShiftInterval<usize>> = intervals.iter().collect();

        for placement in layout_month(&grid, &refs) {
            let week = &grid.weeks[placement.week];
            prop_assert!(placement.start_column <= placement.end_column);
            prop_assert!(placement.end_column <= LAST_COLUMN);
            prop_assert_eq!(placement.span, placement.end_column - placement.start_column + 1);

            let offset = |date: NaiveDate| (date - week.first_day()).num_days() as usize;
            let expected_start = if placement.interval.start < week.first_day() {
                0
            } else {
                offset(placement.interval.start)
            };
            let expected_end = if placement.interval.end > week.last_day() {
                LAST_COLUMN
            } else {
                offset(placement.interval.end)
            };
            prop_assert_eq!(placement.start_column, expected_start);
            prop_assert_eq!(placement.end_column, expected_end);
        }
    }
}
