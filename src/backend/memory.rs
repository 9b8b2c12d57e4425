//! In-process backend seeded from YAML fixtures.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Duration, Utc};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::load_yaml;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Department, DepartmentInput, Profile, Session, ShiftRecord};

use super::Backend;

/// A sign-in account: a profile plus its password.
#[derive(Clone, Deserialize)]
pub struct Account {
    /// Password accepted for this account.
    pub password: String,
    /// The profile the account signs in as.
    #[serde(flatten)]
    pub profile: Profile,
}

/// Seed data for [`MemoryBackend`].
#[derive(Clone, Default)]
pub struct Fixtures {
    /// Departments.
    pub departments: Vec<Department>,
    /// Accounts and their profiles.
    pub accounts: Vec<Account>,
    /// Shift records.
    pub shifts: Vec<ShiftRecord>,
}

impl Fixtures {
    /// Loads `departments.yaml`, `profiles.yaml` and `shifts.yaml` from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        Ok(Self {
            departments: load_yaml(&path.join("departments.yaml"))?,
            accounts: load_yaml(&path.join("profiles.yaml"))?,
            shifts: load_yaml(&path.join("shifts.yaml"))?,
        })
    }
}

/// How long a session stays valid after sign-in, in hours.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

/// A [`Backend`] holding all records in memory.
pub struct MemoryBackend {
    accounts: Vec<Account>,
    session_ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
    departments: RwLock<Vec<Department>>,
    shifts: RwLock<Vec<ShiftRecord>>,
}

impl MemoryBackend {
    /// Creates a backend holding the given seed data.
    pub fn new(fixtures: Fixtures) -> Self {
        info!(
            departments = fixtures.departments.len(),
            accounts = fixtures.accounts.len(),
            shifts = fixtures.shifts.len(),
            "Seeded in-memory backend"
        );
        Self {
            accounts: fixtures.accounts,
            session_ttl: Duration::hours(DEFAULT_SESSION_TTL_HOURS),
            sessions: RwLock::new(HashMap::new()),
            departments: RwLock::new(fixtures.departments),
            shifts: RwLock::new(fixtures.shifts),
        }
    }

    /// Replaces the session lifetime.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    fn is_expired(&self, session: &Session) -> bool {
        session.issued_at + self.session_ttl <= Utc::now()
    }

    /// Adds a shift record.
    pub fn insert_shift(&self, shift: ShiftRecord) -> EngineResult<()> {
        write(&self.shifts)?.push(shift);
        Ok(())
    }
}

fn read<T>(lock: &RwLock<T>) -> EngineResult<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| EngineError::Backend {
        message: "store lock poisoned".to_string(),
    })
}

fn write<T>(lock: &RwLock<T>) -> EngineResult<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| EngineError::Backend {
        message: "store lock poisoned".to_string(),
    })
}

impl Backend for MemoryBackend {
    fn sign_in(&self, email: &str, password: &str) -> EngineResult<Session> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.profile.email.eq_ignore_ascii_case(email.trim()))
            .filter(|account| !password.is_empty() && account.password == password)
            .ok_or_else(|| EngineError::InvalidCredentials {
                email: email.to_string(),
            })?;

        let session = Session::open(account.profile.clone());
        let mut sessions = write(&self.sessions)?;
        sessions.retain(|_, open| !self.is_expired(open));
        sessions.insert(session.token, session.clone());
        drop(sessions);
        debug!(profile_id = %session.profile.id, "Session opened");
        Ok(session)
    }

    fn sign_out(&self, token: &Uuid) -> EngineResult<()> {
        write(&self.sessions)?
            .remove(token)
            .map(|_| ())
            .ok_or(EngineError::NotAuthenticated)
    }

    fn session(&self, token: &Uuid) -> EngineResult<Session> {
        let session = read(&self.sessions)?
            .get(token)
            .cloned()
            .ok_or(EngineError::NotAuthenticated)?;
        if self.is_expired(&session) {
            write(&self.sessions)?.remove(token);
            debug!(profile_id = %session.profile.id, "Session expired");
            return Err(EngineError::NotAuthenticated);
        }
        Ok(session)
    }

    fn departments(&self) -> EngineResult<Vec<Department>> {
        let mut departments = read(&self.departments)?.clone();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    fn department(&self, id: &str) -> EngineResult<Department> {
        read(&self.departments)?
            .iter()
            .find(|department| department.id == id)
            .cloned()
            .ok_or_else(|| EngineError::DepartmentNotFound { id: id.to_string() })
    }

    fn create_department(&self, input: DepartmentInput) -> EngineResult<Department> {
        let department = Department {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            color: input.color,
            description: input.description,
            parent_id: input.parent_id,
            is_active: input.is_active,
            created_at: Utc::now(),
        };
        write(&self.departments)?.push(department.clone());
        Ok(department)
    }

    fn update_department(&self, id: &str, input: DepartmentInput) -> EngineResult<Department> {
        let mut departments = write(&self.departments)?;
        let department = departments
            .iter_mut()
            .find(|department| department.id == id)
            .ok_or_else(|| EngineError::DepartmentNotFound { id: id.to_string() })?;

        department.name = input.name;
        department.color = input.color;
        department.description = input.description;
        department.parent_id = input.parent_id;
        department.is_active = input.is_active;
        Ok(department.clone())
    }

    fn delete_department(&self, id: &str) -> EngineResult<()> {
        let mut departments = write(&self.departments)?;
        let before = departments.len();
        departments.retain(|department| department.id != id);
        if departments.len() == before {
            return Err(EngineError::DepartmentNotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn profiles(&self) -> EngineResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> = self
            .accounts
            .iter()
            .map(|account| account.profile.clone())
            .collect();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }

    fn shifts_between(&self, range: DateRange) -> EngineResult<Vec<ShiftRecord>> {
        let mut shifts: Vec<ShiftRecord> = read(&self.shifts)?
            .iter()
            .filter(|shift| range.intersects(shift.start_date, shift.end_date))
            .cloned()
            .collect();
        shifts.sort_by_key(|shift| shift.start_date);
        Ok(shifts)
    }
}
