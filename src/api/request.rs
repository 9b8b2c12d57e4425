//! Request types for the shift calendar API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::layout::DepartmentFilter;

/// Request body for `POST /auth/sign-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Account e-mail.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Query string for `GET /calendar`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// Month to show as `YYYY-MM`; the current month when absent.
    #[serde(default)]
    pub month: Option<String>,
    /// Comma-separated department ids; all departments when absent or empty.
    #[serde(default)]
    pub departments: Option<String>,
}

impl CalendarQuery {
    /// The anchor date for the requested month, or `None` if `month` is malformed.
    pub fn anchor(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.month.as_deref().map(str::trim) {
            None | Some("") => Some(today),
            Some(month) => NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok(),
        }
    }

    /// The department filter described by `departments`.
    pub fn filter(&self) -> DepartmentFilter {
        self.departments
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }
}
