//! Sidebar navigation filtered by permission.

use serde::Serialize;

use crate::models::Session;

use super::permissions::{Action, PermissionTable, Resource};

/// One entry of the sidebar menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Label shown to the user.
    pub name: &'static str,
    /// Route the entry links to.
    pub href: &'static str,
    /// Permission needed to see the entry; `None` means always visible.
    #[serde(skip)]
    pub requires: Option<(Resource, Action)>,
}

const fn item(
    name: &'static str,
    href: &'static str,
    requires: Option<(Resource, Action)>,
) -> NavItem {
    NavItem {
        name,
        href,
        requires,
    }
}

/// The full menu, in display order.
pub const NAVIGATION: &[NavItem] = &[
    item("Calendar", "/", None),
    item("Users", "/users", Some((Resource::Users, Action::Read))),
    item("Departments", "/departments", Some((Resource::Departments, Action::Read))),
    item("Schedules", "/schedules", Some((Resource::Schedules, Action::Read))),
    item("Shifts", "/shifts", Some((Resource::Shifts, Action::Read))),
    item("Mentorships", "/mentorships", Some((Resource::Shifts, Action::Read))),
    item("Exchanges", "/exchanges", Some((Resource::Exchanges, Action::Read))),
    item("Absences", "/absences", Some((Resource::Absences, Action::Read))),
    item("Locations", "/locations", Some((Resource::Departments, Action::Read))),
    item("Reports", "/reports", Some((Resource::Reports, Action::Read))),
    item("Settings", "/settings", Some((Resource::Users, Action::Update))),
];

/// The menu entries the session may see.
pub fn visible_items<'a>(
    items: &'a [NavItem],
    session: &Session,
    permissions: &PermissionTable,
) -> Vec<&'a NavItem> {
    items
        .iter()
        .filter(|item| match item.requires {
            None => true,
            Some((resource, action)) => {
                permissions.has_permission(session.role(), resource, action)
            }
        })
        .collect()
}
