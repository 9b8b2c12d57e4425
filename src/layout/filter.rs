//! Interval selection for a visible range and department filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{DateRange, ShiftInterval};

/// The set of departments selected in the calendar filter.
///
/// An empty filter means "no restriction": every department is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentFilter {
    selected: BTreeSet<String>,
}

impl DepartmentFilter {
    /// A filter that lets every department through.
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns true if no department is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selects the department if it was not selected, deselects it otherwise.
    pub fn toggle(&mut self, department_id: &str) {
        if !self.selected.remove(department_id) {
            self.selected.insert(department_id.to_string());
        }
    }

    /// Returns true if the department is selected.
    pub fn is_selected(&self, department_id: &str) -> bool {
        self.selected.contains(department_id)
    }

    /// Returns true if shifts of this department should be shown.
    pub fn permits(&self, department_id: &str) -> bool {
        self.is_empty() || self.is_selected(department_id)
    }

    /// The selected department ids, sorted.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DepartmentFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Keeps the intervals visible in `visible_range` and allowed by `filter`.
///
/// Source order is preserved.
///
/// # Example
///
/// ```
/// use shift_calendar::layout::{filter_intervals, DepartmentFilter};
/// use shift_calendar::models::{DateRange, ShiftInterval};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let shifts = vec![
///     ShiftInterval::new("a", d(2), d(3), "icu", ()).unwrap(),
///     ShiftInterval::new("b", d(20), d(21), "emergency", ()).unwrap(),
/// ];
/// let range = DateRange::new(d(12), d(25));
///
/// let visible = filter_intervals(&shifts, range, &DepartmentFilter::all());
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, "b");
///
/// let icu_only: DepartmentFilter = ["icu"].into_iter().collect();
/// assert!(filter_intervals(&shifts, range, &icu_only).is_empty());
/// ```
pub fn filter_intervals<'a, T>(
    all: &'a [ShiftInterval<T>],
    visible_range: DateRange,
    filter: &DepartmentFilter,
) -> Vec<&'a ShiftInterval<T>> {
    all.iter()
        .filter(|interval| visible_range.intersects(interval.start, interval.end))
        .filter(|interval| filter.permits(&interval.department_id))
        .collect()
}

/// The first `limit` multi-day intervals, in source order.
pub fn highlighted_multi_day<'a, T>(
    intervals: &[&'a ShiftInterval<T>],
    limit: usize,
) -> Vec<&'a ShiftInterval<T>> {
    intervals
        .iter()
        .copied()
        .filter(|interval| interval.is_multi_day())
        .take(limit)
        .collect()
}
