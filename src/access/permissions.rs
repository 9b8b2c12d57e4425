//! Role-level permission table.
//!
//! Access is decided by comparing a role's hierarchy level with the minimum
//! level declared for a resource. Level 1 is the most privileged, so a role
//! is allowed when `role.level <= minimum`. A resource may override the
//! minimum for individual actions.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Role, Session};

/// Something a role can be granted access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Staff profiles.
    Users,
    /// Departments and locations.
    Departments,
    /// Department schedules.
    Schedules,
    /// Individual shifts and mentorships.
    Shifts,
    /// Shift exchange requests.
    Exchanges,
    /// Absences and leave.
    Absences,
    /// Reports.
    Reports,
}

impl Resource {
    /// The snake_case name used in configuration and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Departments => "departments",
            Resource::Schedules => "schedules",
            Resource::Shifts => "shifts",
            Resource::Exchanges => "exchanges",
            Resource::Absences => "absences",
            Resource::Reports => "reports",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a record.
    Create,
    /// Read records.
    Read,
    /// Change a record.
    Update,
    /// Remove a record.
    Delete,
}

impl Action {
    /// The snake_case name used in configuration and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum level for one resource, with optional per-action overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRule {
    /// Least privileged level that may perform any action on the resource.
    pub min_level: u8,
    /// Actions whose minimum level differs from `min_level`.
    #[serde(default)]
    pub actions: BTreeMap<Action, u8>,
}

impl ResourceRule {
    /// A rule without per-action overrides.
    pub fn uniform(min_level: u8) -> Self {
        Self {
            min_level,
            actions: BTreeMap::new(),
        }
    }

    /// The minimum level for `action`.
    pub fn min_level_for(&self, action: Action) -> u8 {
        self.actions.get(&action).copied().unwrap_or(self.min_level)
    }
}

/// Declared resource → minimum-level table.
///
/// Resources missing from the table are denied to everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTable {
    rules: BTreeMap<Resource, ResourceRule>,
}

impl PermissionTable {
    /// Builds a table from explicit rules.
    pub fn new(rules: BTreeMap<Resource, ResourceRule>) -> Self {
        Self { rules }
    }

    /// The rule for `resource`, if declared.
    pub fn rule(&self, resource: Resource) -> Option<&ResourceRule> {
        self.rules.get(&resource)
    }

    /// Returns true if `role` may perform `action` on `resource`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::access::{Action, PermissionTable, Resource};
    /// use shift_calendar::models::Role;
    ///
    /// let table = PermissionTable::default();
    /// let manager = Role { id: "3".into(), name: "Manager".into(), level: 3 };
    ///
    /// assert!(table.has_permission(&manager, Resource::Shifts, Action::Update));
    /// assert!(!table.has_permission(&manager, Resource::Departments, Action::Read));
    /// ```
    pub fn has_permission(&self, role: &Role, resource: Resource, action: Action) -> bool {
        self.rule(resource)
            .is_some_and(|rule| role.level <= rule.min_level_for(action))
    }

    /// Like [`has_permission`](Self::has_permission) for a session, as an error.
    pub fn require(&self, session: &Session, resource: Resource, action: Action) -> EngineResult<()> {
        if self.has_permission(session.role(), resource, action) {
            Ok(())
        } else {
            Err(EngineError::PermissionDenied {
                resource: resource.to_string(),
                action: action.to_string(),
            })
        }
    }
}

impl Default for PermissionTable {
    /// Directors manage users, coordinators departments, managers the
    /// scheduling resources and analysts reports.
    fn default() -> Self {
        let rules = [
            (Resource::Users, 1),
            (Resource::Departments, 2),
            (Resource::Schedules, 3),
            (Resource::Shifts, 3),
            (Resource::Exchanges, 3),
            (Resource::Absences, 3),
            (Resource::Reports, 4),
        ]
        .into_iter()
        .map(|(resource, level)| (resource, ResourceRule::uniform(level)))
        .collect();
        Self { rules }
    }
}
