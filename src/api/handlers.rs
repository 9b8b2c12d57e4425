//! HTTP request handlers for the shift calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::{NAVIGATION, visible_items};
use crate::error::{EngineError, EngineResult};
use crate::models::{DepartmentInput, Session};
use crate::services::{DepartmentService, build_month_view};

use super::request::{CalendarQuery, SignInRequest};
use super::response::{ApiError, ApiErrorResponse, NavigationResponse, SignInResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/sign-in", post(sign_in_handler))
        .route("/auth/sign-out", post(sign_out_handler))
        .route("/navigation", get(navigation_handler))
        .route(
            "/departments",
            get(list_departments_handler).post(create_department_handler),
        )
        .route(
            "/departments/:id",
            put(update_department_handler).delete(delete_department_handler),
        )
        .route("/calendar", get(calendar_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Translates a body rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    let response = ApiErrorResponse::bad_request(error);
    json_response(response.status, response.error)
}

fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// Resolves the session named by the `Authorization: Bearer` header.
fn authenticate(state: &AppState, headers: &HeaderMap) -> EngineResult<Session> {
    let token = bearer_token(headers).ok_or(EngineError::NotAuthenticated)?;
    state.backend().session(&token)
}

/// Handler for POST /auth/sign-in.
async fn sign_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.backend().sign_in(&request.email, &request.password) {
        Ok(session) => {
            info!(
                correlation_id = %correlation_id,
                profile_id = %session.profile.id,
                role = %session.role().name,
                "Signed in"
            );
            json_response(
                StatusCode::OK,
                SignInResponse {
                    token: session.token,
                    profile: session.profile,
                },
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /auth/sign-out.
async fn sign_out_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let Some(token) = bearer_token(&headers) else {
        return error_response(correlation_id, EngineError::NotAuthenticated);
    };

    match state.backend().sign_out(&token) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Signed out");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /navigation.
///
/// Returns the sidebar entries the caller's role is allowed to see.
async fn navigation_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match authenticate(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };

    let items = visible_items(NAVIGATION, &session, state.config().permissions())
        .into_iter()
        .cloned()
        .collect();
    json_response(StatusCode::OK, NavigationResponse { items })
}

async fn list_departments_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match authenticate(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };

    let service = DepartmentService::new(state.backend(), state.config().permissions());
    match service.list(&session) {
        Ok(departments) => json_response(StatusCode::OK, departments),
        Err(err) => error_response(correlation_id, err),
    }
}

async fn create_department_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<DepartmentInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match authenticate(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let service = DepartmentService::new(state.backend(), state.config().permissions());
    match service.create(&session, input) {
        Ok(department) => json_response(StatusCode::CREATED, department),
        Err(err) => error_response(correlation_id, err),
    }
}

async fn update_department_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<DepartmentInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match authenticate(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let service = DepartmentService::new(state.backend(), state.config().permissions());
    match service.update(&session, &id, input) {
        Ok(department) => json_response(StatusCode::OK, department),
        Err(err) => error_response(correlation_id, err),
    }
}

async fn delete_department_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match authenticate(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };

    let service = DepartmentService::new(state.backend(), state.config().permissions());
    match service.delete(&session, &id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /calendar.
///
/// Lays out the requested month for every signed-in user; the department
/// filter narrows the bars and the highlights together.
async fn calendar_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match authenticate(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string error"
            );
            let response = ApiErrorResponse::bad_request(ApiError::validation_error(body_text));
            return json_response(response.status, response.error);
        }
    };

    let Some(anchor) = query.anchor(Utc::now().date_naive()) else {
        warn!(
            correlation_id = %correlation_id,
            month = ?query.month,
            "Invalid month parameter"
        );
        let response = ApiErrorResponse::bad_request(ApiError::validation_error(
            "month must be formatted as YYYY-MM",
        ));
        return json_response(response.status, response.error);
    };
    let filter = query.filter();

    let start_time = Instant::now();
    match build_month_view(state.backend(), anchor, &filter, state.config().config().calendar()) {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                profile_id = %session.profile.id,
                departments = filter.selected().count(),
                bars = view.bars.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calendar month laid out"
            );
            json_response(StatusCode::OK, view)
        }
        Err(err) => error_response(correlation_id, err),
    }
}
