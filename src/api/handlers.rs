//! HTTP request handlers for the staffing validator API.
//!
//! Both endpoints follow the same contract: a record that passes its rule set
//! is echoed back with `200 OK`; a record that fails gets `400 Bad Request`
//! with the ordered list of failures; a body that cannot be read as a record
//! gets `400 Bad Request` with an [`ApiError`](super::ApiError).

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeRecord, StaffRecord};
use crate::validation::RuleSet;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employee", post(employee_handler))
        .route("/api/staff", post(staff_handler))
        .with_state(state)
}

/// Handler for POST /api/employee.
async fn employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee submission");

    match payload {
        Ok(Json(record)) => {
            validate_submission(&record, state.employee_rules(), state.today(), correlation_id)
        }
        Err(rejection) => reject(rejection, correlation_id),
    }
}

/// Handler for POST /api/staff.
async fn staff_handler(
    State(state): State<AppState>,
    payload: Result<Json<StaffRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing staff submission");

    match payload {
        Ok(Json(record)) => {
            validate_submission(&record, state.staff_rules(), state.today(), correlation_id)
        }
        Err(rejection) => reject(rejection, correlation_id),
    }
}

/// Runs `rules` over `record` and turns the outcome into a response.
fn validate_submission<R: Serialize>(
    record: &R,
    rules: &RuleSet<R>,
    today: NaiveDate,
    correlation_id: Uuid,
) -> Response {
    let result = rules.validate(record, today);

    if result.is_valid() {
        info!(
            correlation_id = %correlation_id,
            rule_set = rules.name(),
            "Submission accepted"
        );
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(record),
        )
            .into_response()
    } else {
        info!(
            correlation_id = %correlation_id,
            rule_set = rules.name(),
            failures = result.len(),
            "Submission rejected"
        );
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(result),
        )
            .into_response()
    }
}

fn reject(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Request body rejected"
    );
    let api_error: ApiErrorResponse = rejection.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
