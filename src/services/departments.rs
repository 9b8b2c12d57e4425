//! Department administration gated by role permissions.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::access::{Action, PermissionTable, Resource};
use crate::backend::Backend;
use crate::error::{EngineError, EngineResult};
use crate::models::{Department, DepartmentInput, Profile, Session};

/// A department together with the number of staff linked to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    /// The department.
    #[serde(flatten)]
    pub department: Department,
    /// Profiles whose department is this one.
    pub user_count: usize,
}

/// Counts profiles per department id.
pub fn user_counts(profiles: &[Profile]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for department_id in profiles.iter().filter_map(|p| p.department_id.as_ref()) {
        *counts.entry(department_id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Department CRUD on behalf of a signed-in session.
pub struct DepartmentService<'a> {
    backend: &'a dyn Backend,
    permissions: &'a PermissionTable,
}

impl<'a> DepartmentService<'a> {
    /// Creates a service over `backend`, checking against `permissions`.
    pub fn new(backend: &'a dyn Backend, permissions: &'a PermissionTable) -> Self {
        Self {
            backend,
            permissions,
        }
    }

    /// Lists every department with its user count.
    pub fn list(&self, session: &Session) -> EngineResult<Vec<DepartmentSummary>> {
        self.permissions
            .require(session, Resource::Departments, Action::Read)?;

        let counts = user_counts(&self.backend.profiles()?);
        Ok(self
            .backend
            .departments()?
            .into_iter()
            .map(|department| DepartmentSummary {
                user_count: counts.get(&department.id).copied().unwrap_or(0),
                department,
            })
            .collect())
    }

    /// Validates and stores a new department.
    pub fn create(&self, session: &Session, input: DepartmentInput) -> EngineResult<Department> {
        self.permissions
            .require(session, Resource::Departments, Action::Create)?;

        let input = input.validate()?;
        self.check_parent(None, input.parent_id.as_deref())?;

        let department = self.backend.create_department(input)?;
        info!(
            department_id = %department.id,
            profile_id = %session.profile.id,
            "Department created"
        );
        Ok(department)
    }

    /// Validates and applies changes to an existing department.
    pub fn update(
        &self,
        session: &Session,
        id: &str,
        input: DepartmentInput,
    ) -> EngineResult<Department> {
        self.permissions
            .require(session, Resource::Departments, Action::Update)?;

        let input = input.validate()?;
        self.backend.department(id)?;
        self.check_parent(Some(id), input.parent_id.as_deref())?;

        let department = self.backend.update_department(id, input)?;
        info!(
            department_id = %department.id,
            profile_id = %session.profile.id,
            "Department updated"
        );
        Ok(department)
    }

    /// Deletes a department that has no staff linked to it.
    pub fn delete(&self, session: &Session, id: &str) -> EngineResult<()> {
        self.permissions
            .require(session, Resource::Departments, Action::Delete)?;

        self.backend.department(id)?;
        let linked_profiles = user_counts(&self.backend.profiles()?)
            .get(id)
            .copied()
            .unwrap_or(0);
        if linked_profiles > 0 {
            return Err(EngineError::DepartmentInUse {
                id: id.to_string(),
                linked_profiles,
            });
        }

        self.backend.delete_department(id)?;
        info!(
            department_id = %id,
            profile_id = %session.profile.id,
            "Department deleted"
        );
        Ok(())
    }

    /// The parent must exist and must not be the department itself.
    fn check_parent(&self, own_id: Option<&str>, parent_id: Option<&str>) -> EngineResult<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };
        if own_id == Some(parent_id) {
            return Err(EngineError::InvalidDepartment {
                field: "parent_id".to_string(),
                message: "a department cannot be its own parent".to_string(),
            });
        }
        match self.backend.department(parent_id) {
            Ok(_) => Ok(()),
            Err(EngineError::DepartmentNotFound { id }) => Err(EngineError::InvalidDepartment {
                field: "parent_id".to_string(),
                message: format!("unknown department '{}'", id),
            }),
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Fixtures, MemoryBackend};

    fn backend() -> MemoryBackend {
        MemoryBackend::new(Fixtures::load("./config/fixtures").unwrap())
    }

    fn input(name: &str) -> DepartmentInput {
        DepartmentInput {
            name: name.to_string(),
            description: Some("Imaging and scans".to_string()),
            color: "#0ea5e9".to_string(),
            parent_id: None,
            is_active: true,
        }
    }

    #[test]
    fn test_list_includes_user_counts() {
        let backend = backend();
        let table = PermissionTable::default();
        let service = DepartmentService::new(&backend, &table);
        let session = backend
            .sign_in("ana.costa@hospital.example", "coordinator-pass")
            .unwrap();

        let summaries = service.list(&session).unwrap();
        let count_of = |id: &str| {
            summaries
                .iter()
                .find(|s| s.department.id == id)
                .map(|s| s.user_count)
        };
        assert_eq!(count_of("ward"), Some(2));
        assert_eq!(count_of("emergency"), Some(2));
        assert_eq!(count_of("icu"), Some(0));
    }

    #[test]
    fn test_manager_cannot_read_departments() {
        let backend = backend();
        let table = PermissionTable::default();
        let service = DepartmentService::new(&backend, &table);
        let session = backend
            .sign_in("sammy.santos@hospital.example", "manager-pass")
            .unwrap();

        assert!(matches!(
            service.list(&session),
            Err(EngineError::PermissionDenied { .. })
        ));
        assert!(matches!(
            service.create(&session, input("Radiology")),
            Err(EngineError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn test_create_update_delete() {
        let backend = backend();
        let table = PermissionTable::default();
        let service = DepartmentService::new(&backend, &table);
        let session = backend
            .sign_in("carlos.silva@hospital.example", "director-pass")
            .unwrap();

        let created = service.create(&session, input("  Radiology ")).unwrap();
        assert_eq!(created.name, "Radiology");

        let mut change = input("Imaging");
        change.parent_id = Some("surgery".to_string());
        let updated = service.update(&session, &created.id, change).unwrap();
        assert_eq!(updated.name, "Imaging");
        assert_eq!(updated.parent_id.as_deref(), Some("surgery"));

        service.delete(&session, &created.id).unwrap();
        assert!(matches!(
            service.delete(&session, &created.id),
            Err(EngineError::DepartmentNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_refused_with_linked_users() {
        let backend = backend();
        let table = PermissionTable::default();
        let service = DepartmentService::new(&backend, &table);
        let session = backend
            .sign_in("carlos.silva@hospital.example", "director-pass")
            .unwrap();

        match service.delete(&session, "ward") {
            Err(EngineError::DepartmentInUse { linked_profiles, .. }) => {
                assert_eq!(linked_profiles, 2)
            }
            other => panic!("Expected DepartmentInUse, got {:?}", other),
        }
        assert!(backend.department("ward").is_ok());
    }

    #[test]
    fn test_invalid_input_and_parent_rejected() {
        let backend = backend();
        let table = PermissionTable::default();
        let service = DepartmentService::new(&backend, &table);
        let session = backend
            .sign_in("carlos.silva@hospital.example", "director-pass")
            .unwrap();

        assert!(matches!(
            service.create(&session, input("X")),
            Err(EngineError::InvalidDepartment { .. })
        ));

        let mut orphan = input("Radiology");
        orphan.parent_id = Some("missing".to_string());
        match service.create(&session, orphan) {
            Err(EngineError::InvalidDepartment { field, .. }) => assert_eq!(field, "parent_id"),
            other => panic!("Expected InvalidDepartment, got {:?}", other),
        }

        let mut own_parent = input("Intensive Care");
        own_parent.parent_id = Some("icu".to_string());
        assert!(matches!(
            service.update(&session, "icu", own_parent),
            Err(EngineError::InvalidDepartment { .. })
        ));
    }
}
