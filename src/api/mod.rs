//! HTTP API module for the staffing validator.
//!
//! This module provides the REST endpoints that validate employee and
//! staff submissions:
//!
//! - `POST /api/employee`
//! - `POST /api/staff`

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
