//! Error types for the shift calendar.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the services and the backend can report. The layout
//! engine itself never fails.

use thiserror::Error;

/// The main error type for the shift calendar.
///
/// # Example
///
/// ```
/// use shift_calendar::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A department payload failed validation.
    #[error("Invalid department field '{field}': {message}")]
    InvalidDepartment {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No department exists with the given id.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// The department id that was looked up.
        id: String,
    },

    /// The department still has staff linked to it and cannot be deleted.
    #[error("Department '{id}' has {linked_profiles} linked user(s)")]
    DepartmentInUse {
        /// The department id.
        id: String,
        /// How many profiles reference the department.
        linked_profiles: usize,
    },

    /// The signed-in role is not allowed to perform the action.
    #[error("Permission denied: cannot {action} {resource}")]
    PermissionDenied {
        /// The resource being accessed.
        resource: String,
        /// The action that was attempted.
        action: String,
    },

    /// Sign-in failed.
    #[error("Invalid credentials for '{email}'")]
    InvalidCredentials {
        /// The e-mail address used to sign in.
        email: String,
    },

    /// The request carried no session, or the session is unknown.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The data-access collaborator failed.
    #[error("Backend error: {message}")]
    Backend {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
