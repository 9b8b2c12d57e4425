//! Application services.
//!
//! Services combine the backend, the permission table and the layout engine
//! into the operations the HTTP layer exposes.

mod calendar;
mod departments;

pub use calendar::{CalendarBar, MonthView, build_month_view};
pub use departments::{DepartmentService, DepartmentSummary, user_counts};
