//! API handlers

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::{self, AnalysisReport, Upload};
use crate::api::{disposition, ApiError, AppState};
use crate::Error;

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

pub const WELCOME_MESSAGE: &str = "Welcome to the AI Service (via Nginx)!";

/// Liveness probe
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check with node identity
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        node_id: state.node_id().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub node_id: String,
}

/// Analyze an uploaded image
///
/// Only the metadata of the `file` field is read; its bytes are left in the
/// request body.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let mut multipart = multipart?;
    let upload = find_upload(&mut multipart).await?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        filename = %upload.filename,
        analyzer = state.analyzer.name(),
        "Analyzing image"
    );

    let report = analysis::analyze(state.analyzer.as_ref(), upload)
        .await
        .map_err(|e| {
            tracing::error!(%request_id, error = %e, "Analysis failed");
            ApiError::from(e)
        })?;

    Ok(Json(report))
}

async fn find_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // RFC 6266: `filename*` wins over `filename` when both are sent
        let filename = disposition::ext_filename(field.headers())
            .or_else(|| field.file_name().map(str::to_string))
            .ok_or_else(|| {
                Error::invalid_upload(format!(
                    "multipart field '{}' must be a file upload",
                    FILE_FIELD
                ))
            })?;

        let mut upload = Upload::new(filename);
        if let Some(content_type) = field.content_type() {
            upload = upload.with_content_type(content_type);
        }
        return Ok(upload);
    }

    Err(Error::invalid_upload(format!(
        "missing required multipart field '{}'",
        FILE_FIELD
    ))
    .into())
}
