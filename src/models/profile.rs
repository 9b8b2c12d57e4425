//! Staff profiles, roles and sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job role with its hierarchy level.
///
/// Level 1 is the most privileged (director); higher numbers grant less.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hierarchy level: 1 director, 2 coordinator, 3 manager, 4 analyst, 5 staff.
    pub level: u8,
}

/// Clinical experience of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to the unit.
    Beginner,
    /// Fully autonomous.
    Experienced,
    /// Can mentor beginners.
    Mentor,
}

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    /// Working normally.
    Active,
    /// No longer working.
    Inactive,
    /// Temporarily away.
    OnLeave,
}

/// A staff member's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile.
    pub id: String,
    /// Sign-in e-mail address.
    pub email: String,
    /// Full name.
    pub name: String,
    /// The profile's role.
    pub role: Role,
    /// Job title.
    pub position: String,
    /// Department the staff member belongs to.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Clinical experience.
    pub experience_level: ExperienceLevel,
    /// Employment status.
    pub status: ProfileStatus,
}

/// A signed-in session.
///
/// Handed out by the backend on sign-in and passed by reference to whatever
/// needs to make permission decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: Uuid,
    /// The signed-in profile.
    pub profile: Profile,
    /// When the session was opened.
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Opens a new session for `profile` with a fresh token.
    pub fn open(profile: Profile) -> Self {
        Self {
            token: Uuid::new_v4(),
            profile,
            issued_at: Utc::now(),
        }
    }

    /// The role of the signed-in profile.
    pub fn role(&self) -> &Role {
        &self.profile.role
    }
}
