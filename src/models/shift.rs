//! Shift records and the intervals the layout engine works on.
//!
//! [`ShiftRecord`] is the typed row the backend hands over. Before layout it
//! is converted into a [`ShiftInterval`], which keeps only what the engine
//! needs (id, day span, department) and carries the record along as payload.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How many people staff the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// A single staff member.
    Individual,
    /// Two staff members working together.
    Pair,
    /// A whole team.
    Team,
}

/// Confirmation status of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Planned but not yet confirmed.
    Provisional,
    /// Confirmed by the schedule owner.
    Confirmed,
    /// Cancelled; still shown on the calendar.
    Cancelled,
}

/// A work shift as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The department whose schedule owns the shift.
    pub department_id: String,
    /// The staff member working the shift.
    pub user_id: String,
    /// Display name of the staff member.
    pub user_name: String,
    /// First calendar day of the shift (inclusive).
    pub start_date: NaiveDate,
    /// Last calendar day of the shift (inclusive).
    pub end_date: NaiveDate,
    /// Time of day the shift starts.
    pub start_time: NaiveTime,
    /// Time of day the shift ends.
    pub end_time: NaiveTime,
    /// Staffing kind.
    pub kind: ShiftKind,
    /// Confirmation status.
    pub status: ShiftStatus,
    /// Where the shift takes place.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftRecord {
    /// Returns true if the shift covers more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }
}

/// The unit the layout engine operates on.
///
/// `start` and `end` are inclusive calendar days. The payload is carried
/// through layout untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftInterval<T> {
    /// Opaque unique identifier.
    pub id: String,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive), never before `start`.
    pub end: NaiveDate,
    /// Department that owns the interval.
    pub department_id: String,
    /// Upstream record passed through unchanged.
    pub payload: T,
}

impl<T> ShiftInterval<T> {
    /// Creates an interval, rejecting `end < start`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::models::ShiftInterval;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    /// let single = ShiftInterval::new("a", day, day, "emergency", ()).unwrap();
    /// assert!(!single.is_multi_day());
    ///
    /// let earlier = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
    /// assert!(ShiftInterval::new("b", day, earlier, "emergency", ()).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        department_id: impl Into<String>,
        payload: T,
    ) -> EngineResult<Self> {
        let id = id.into();
        if end < start {
            return Err(EngineError::InvalidShift {
                shift_id: id,
                message: format!("end date {} is before start date {}", end, start),
            });
        }
        Ok(Self {
            id,
            start,
            end,
            department_id: department_id.into(),
            payload,
        })
    }

    /// Returns true if the two intervals share at least one day.
    ///
    /// Uses the full bounds, never a clipped view.
    pub fn overlaps<U>(&self, other: &ShiftInterval<U>) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Returns true if `date` falls inside the interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if the interval spans more than one day.
    pub fn is_multi_day(&self) -> bool {
        self.start != self.end
    }
}

impl TryFrom<ShiftRecord> for ShiftInterval<ShiftRecord> {
    type Error = EngineError;

    fn try_from(record: ShiftRecord) -> EngineResult<Self> {
        ShiftInterval::new(
            record.id.clone(),
            record.start_date,
            record.end_date,
            record.department_id.clone(),
            record,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(id: &str, start: &str, end: &str) -> ShiftRecord {
        ShiftRecord {
            id: id.to_string(),
            department_id: "emergency".to_string(),
            user_id: "u1".to_string(),
            user_name: "Sammy Lima".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            kind: ShiftKind::Individual,
            status: ShiftStatus::Confirmed,
            location: None,
            notes: None,
        }
    }

    #[test]
    fn test_overlap_uses_full_bounds() {
        let a = ShiftInterval::new("a", make_date("2025-01-10"), make_date("2025-01-14"), "d", ())
            .unwrap();
        let b = ShiftInterval::new("b", make_date("2025-01-14"), make_date("2025-01-20"), "d", ())
            .unwrap();
        let c = ShiftInterval::new("c", make_date("2025-01-15"), make_date("2025-01-20"), "d", ())
            .unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_record_conversion_keeps_payload() {
        let record = make_record("sammy", "2025-01-13", "2025-01-19");
        let interval = ShiftInterval::try_from(record.clone()).unwrap();

        assert_eq!(interval.id, "sammy");
        assert_eq!(interval.department_id, "emergency");
        assert_eq!(interval.payload, record);
        assert!(interval.is_multi_day());
    }

    #[test]
    fn test_record_conversion_rejects_reversed_dates() {
        let record = make_record("broken", "2025-01-19", "2025-01-13");
        match ShiftInterval::try_from(record) {
            Err(EngineError::InvalidShift { shift_id, .. }) => assert_eq!(shift_id, "broken"),
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_shift_record_deserialization() {
        let json = r#"{
            "id": "joao-weekend",
            "department_id": "icu",
            "user_id": "u2",
            "user_name": "João Souza",
            "start_date": "2025-01-11",
            "end_date": "2025-01-12",
            "start_time": "19:00:00",
            "end_time": "07:00:00",
            "kind": "pair",
            "status": "provisional"
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, ShiftKind::Pair);
        assert_eq!(record.status, ShiftStatus::Provisional);
        assert!(record.location.is_none());
        assert!(record.is_multi_day());
    }
}
