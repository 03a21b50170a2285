//! Assignment handlers: two-table upload and the single-table legacy upload

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{info, trace, warn};

use santa_core::modules::exchange;
use santa_core::modules::export::ATTACHMENT_FILE_NAME;
use santa_types::TypedError;

use crate::state::AppState;

pub const CURRENT_FIELD: &str = "current";
pub const PREVIOUS_FIELD: &str = "previous";
pub const LEGACY_FIELD: &str = "file";

const CSV_CONTENT_TYPES: [&str; 3] = ["text/csv", "application/csv", "application/vnd.ms-excel"];

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, kind: &'static str, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: kind, message: message.into() }))
}

fn exchange_error(e: TypedError) -> ApiError {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    warn!(kind = e.kind(), status = status.as_u16(), "Exchange failed");
    api_error(status, e.kind(), e.to_string())
}

/// One file part of a multipart upload.
pub(crate) struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

impl Upload {
    fn is_empty(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    fn looks_like_csv(&self) -> bool {
        let by_type = self.content_type.as_deref().is_some_and(|ct| {
            let essence = ct.split(';').next().unwrap_or("").trim();
            CSV_CONTENT_TYPES.iter().any(|t| essence.eq_ignore_ascii_case(t))
        });
        let by_name = self
            .file_name
            .as_deref()
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".csv"));
        by_type || by_name
    }
}

/// Collect the named file parts; other fields are skipped.
async fn read_uploads(
    state: &AppState,
    multipart: &mut Multipart,
    wanted: &[&str],
) -> Result<HashMap<String, Upload>, ApiError> {
    let limit = state.max_upload_bytes();
    let mut uploads = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e, limit))?
    {
        let name = field.name().unwrap_or("").to_string();
        if !wanted.contains(&name.as_str()) {
            trace!("Ignoring unknown multipart field: {}", name);
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&e, limit))?;

        uploads.insert(name, Upload { file_name, content_type, bytes });
    }

    Ok(uploads)
}

fn multipart_error(e: &MultipartError, limit: usize) -> ApiError {
    let status = e.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(limit, "Upload rejected by body limit");
        return api_error(status, "upload", format!("Upload exceeds the {}-byte limit.", limit));
    }
    api_error(status, "upload", e.body_text())
}

fn check_upload(state: &AppState, upload: &Upload) -> Result<(), ApiError> {
    if state.strict_uploads() && !upload.looks_like_csv() {
        return Err(api_error(StatusCode::BAD_REQUEST, "upload", "Please upload a CSV file."));
    }
    Ok(())
}

fn csv_attachment(csv: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", ATTACHMENT_FILE_NAME),
            ),
        ],
        csv,
    )
        .into_response()
}

/// Runs the exchange on the blocking pool.
async fn generate(
    state: &AppState,
    current: Bytes,
    previous: Option<Bytes>,
) -> Result<Response, ApiError> {
    let options = state.exchange_options();
    let outcome = tokio::task::spawn_blocking(move || {
        exchange::run_exchange(&current, previous.as_deref(), &options)
    })
    .await
    .map_err(|e| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            format!("Task join error: {}", e),
        )
    })?
    .map_err(exchange_error)?;

    info!(
        participants = outcome.pairing.len(),
        prior_constraints = outcome.prior_constraints,
        attempts = outcome.attempts_used,
        "Generated assignments table"
    );
    Ok(csv_attachment(outcome.csv))
}

/// `POST /api/assignments`: `current` table plus optional `previous` table.
pub async fn create_assignments(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut uploads =
        read_uploads(&state, &mut multipart, &[CURRENT_FIELD, PREVIOUS_FIELD]).await?;

    let current = uploads.remove(CURRENT_FIELD).ok_or_else(|| {
        api_error(StatusCode::BAD_REQUEST, "upload", "Missing 'current' CSV upload.")
    })?;
    check_upload(&state, &current)?;

    // An unselected optional file input arrives as an empty part.
    let previous = uploads.remove(PREVIOUS_FIELD).filter(|u| !u.is_empty());
    if let Some(previous) = &previous {
        check_upload(&state, previous)?;
    }

    generate(&state, current.bytes, previous.map(|u| u.bytes)).await
}

/// `POST /upload/employee_list`: single table; a `Secret_Child_EmailID`
/// column, when present, is read as last round's pairing.
pub async fn upload_employee_list(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut uploads = read_uploads(&state, &mut multipart, &[LEGACY_FIELD]).await?;

    let file = uploads.remove(LEGACY_FIELD).ok_or_else(|| {
        api_error(StatusCode::BAD_REQUEST, "upload", "Missing 'file' CSV upload.")
    })?;
    check_upload(&state, &file)?;

    generate(&state, file.bytes, None).await
}
