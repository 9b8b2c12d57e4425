//! Data-access and authentication collaborator.
//!
//! Persistence and sign-in live behind the [`Backend`] trait so the services
//! and the HTTP layer never reach into storage directly. [`MemoryBackend`]
//! keeps everything in process and is seeded from YAML fixtures.

mod memory;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{DateRange, Department, DepartmentInput, Profile, Session, ShiftRecord};

pub use memory::{Account, DEFAULT_SESSION_TTL_HOURS, Fixtures, MemoryBackend};

/// Typed access to the hosted data and auth service.
pub trait Backend: Send + Sync {
    /// Signs in with e-mail and password and opens a session.
    fn sign_in(&self, email: &str, password: &str) -> EngineResult<Session>;

    /// Closes the session identified by `token`.
    fn sign_out(&self, token: &Uuid) -> EngineResult<()>;

    /// Looks up an open session.
    fn session(&self, token: &Uuid) -> EngineResult<Session>;

    /// All departments, ordered by name.
    fn departments(&self) -> EngineResult<Vec<Department>>;

    /// One department by id.
    fn department(&self, id: &str) -> EngineResult<Department>;

    /// Stores a new department and returns it with its id.
    fn create_department(&self, input: DepartmentInput) -> EngineResult<Department>;

    /// Replaces the editable fields of a department.
    fn update_department(&self, id: &str, input: DepartmentInput) -> EngineResult<Department>;

    /// Removes a department.
    fn delete_department(&self, id: &str) -> EngineResult<()>;

    /// All staff profiles, ordered by name.
    fn profiles(&self) -> EngineResult<Vec<Profile>>;

    /// Shifts touching `range`, ordered by start date.
    fn shifts_between(&self, range: DateRange) -> EngineResult<Vec<ShiftRecord>>;
}
