//! Department model and its create/update payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Colour given to departments created without one.
pub const DEFAULT_DEPARTMENT_COLOR: &str = "#3b82f6";

/// Shortest accepted department name, after trimming.
pub const MIN_DEPARTMENT_NAME_LEN: usize = 3;

/// A hospital department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identification colour as `#rrggbb`, used for calendar bars.
    pub color: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Parent department, if this is a sub-unit.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Inactive departments are kept but hidden from scheduling.
    pub is_active: bool,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or updating a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInput {
    /// Display name; at least three characters once trimmed.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Identification colour as `#rrggbb`.
    #[serde(default = "default_color")]
    pub color: String,
    /// Optional parent department.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Active flag.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_color() -> String {
    DEFAULT_DEPARTMENT_COLOR.to_string()
}

fn default_active() -> bool {
    true
}

impl DepartmentInput {
    /// Checks the payload and returns it with the name trimmed.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::models::DepartmentInput;
    ///
    /// let input: DepartmentInput = serde_json::from_str(r#"{"name": " Cardiology "}"#).unwrap();
    /// let input = input.validate().unwrap();
    /// assert_eq!(input.name, "Cardiology");
    /// assert_eq!(input.color, "#3b82f6");
    /// assert!(input.is_active);
    /// ```
    pub fn validate(mut self) -> EngineResult<Self> {
        self.name = self.name.trim().to_string();
        if self.name.chars().count() < MIN_DEPARTMENT_NAME_LEN {
            return Err(EngineError::InvalidDepartment {
                field: "name".to_string(),
                message: format!(
                    "must be at least {} characters long",
                    MIN_DEPARTMENT_NAME_LEN
                ),
            });
        }
        if !is_hex_color(&self.color) {
            return Err(EngineError::InvalidDepartment {
                field: "color".to_string(),
                message: format!("'{}' is not a #rrggbb colour", self.color),
            });
        }
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Ok(self)
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
