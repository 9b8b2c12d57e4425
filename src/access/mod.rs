//! Role-based access control.
//!
//! Permission checks are pure functions over a declared table and the
//! [`Session`](crate::models::Session) passed in by the caller; there is no
//! process-wide auth state.

mod navigation;
mod permissions;

pub use navigation::{NAVIGATION, NavItem, visible_items};
pub use permissions::{Action, PermissionTable, Resource, ResourceRule};
