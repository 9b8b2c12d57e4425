//! Core data models for the shift calendar.
//!
//! This module contains the typed records exchanged between the backend,
//! the services and the layout engine.

mod date_range;
mod department;
mod profile;
mod shift;

pub use date_range::DateRange;
pub use department::{
    DEFAULT_DEPARTMENT_COLOR, Department, DepartmentInput, MIN_DEPARTMENT_NAME_LEN,
};
pub use profile::{ExperienceLevel, Profile, ProfileStatus, Role, Session};
pub use shift::{ShiftInterval, ShiftKind, ShiftRecord, ShiftStatus};
