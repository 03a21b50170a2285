//! API Routes
//!
//! REST endpoints for generating assignments from uploaded tables.

pub(crate) mod assignments;


use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Secret Santa Game";

pub fn router() -> Router<AppState> {
    Router::new()
        // Status
        .route("/status", get(get_status))
        // Assignments
        .route("/assignments", post(assignments::create_assignments))
}

// ============ Status ============

#[derive(Serialize)]
pub struct StatusResponse {
    message: &'static str,
    version: &'static str,
    max_upload_bytes: usize,
    assignment_attempts: u32,
}

async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: WELCOME_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        max_upload_bytes: state.max_upload_bytes(),
        assignment_attempts: state.config().assignment_attempts,
    })
}
