//! HTTP API module for the shift calendar.
//!
//! This module provides the REST endpoints for signing in, the sidebar menu,
//! department administration and the laid-out month calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarQuery, SignInRequest};
pub use response::{ApiError, ApiErrorResponse, NavigationResponse, SignInResponse};
pub use state::AppState;
