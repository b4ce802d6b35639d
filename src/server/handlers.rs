//! Request handlers
//!
//! Each handler adapts one transport to the workflow: multipart form
//! fields or fetched URL buffers become an [`UploadBatch`], the
//! workflow runs on the blocking pool, and the artifact is transmitted
//! before its workspace is released.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::batch::{UploadBatch, UploadItem};
use crate::error::{Error, Result};
use crate::pdf::count_pages;
use crate::server::SharedState;
use crate::workflow::MergeWorkflow;

/// Service metadata returned by `GET /api/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub max_file_size: String,
    pub supported_formats: Vec<String>,
}

pub async fn status_handler(State(state): State<SharedState>) -> Json<StatusResponse> {
    let config = state.workflow.config();
    Json(StatusResponse {
        status: "online".to_string(),
        service: "PDF Merge Service".to_string(),
        max_file_size: format!("{}MB", config.max_upload_bytes / (1024 * 1024)),
        supported_formats: config
            .allowed_extensions
            .iter()
            .map(|e| e.to_ascii_uppercase())
            .collect(),
    })
}

/// `POST /api/merge`: multipart upload with repeated `files` fields.
pub async fn merge_upload_handler(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut sources = Vec::new();

    // Multipart read errors keep their own status: 413 for a body-limit
    // breach, 400 for a malformed body.
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != "files" && field_name != "files[]" {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let data = field.bytes().await?;
        sources.push(UploadItem::new(filename, data.to_vec()));
    }

    respond_with_merge(&state, UploadBatch::from_sources(sources)).await
}

/// Request body for the URL-based entry point.
#[derive(Debug, Deserialize)]
pub struct MergeRemoteRequest {
    pub first_url: Option<String>,
    pub second_url: Option<String>,
}

/// `POST /api/merge/remote`: fetch two documents by URL and merge them.
///
/// Validation here only checks URL presence, not file type. Fetched
/// documents are staged under fixed names inside the per-request
/// workspace, so concurrent requests cannot collide.
pub async fn merge_remote_handler(
    State(state): State<SharedState>,
    Json(request): Json<MergeRemoteRequest>,
) -> Result<Response> {
    let first_url = request
        .first_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(Error::MissingUrl("first_url"))?;
    let second_url = request
        .second_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(Error::MissingUrl("second_url"))?;

    // Remote documents honor the same size cap as direct uploads.
    let max_bytes = state.workflow.config().max_upload_bytes;
    let first = crate::fetch::fetch_document(&state.client, first_url, max_bytes).await?;
    let second = crate::fetch::fetch_document(&state.client, second_url, max_bytes).await?;

    let batch = UploadBatch::from_sources(vec![
        UploadItem::new("first.pdf", first),
        UploadItem::new("second.pdf", second),
    ]);

    respond_with_merge(&state, batch).await
}

/// Run the workflow on the blocking pool and build the download
/// response. The artifact is fully read before its workspace goes away.
async fn respond_with_merge(state: &SharedState, batch: UploadBatch) -> Result<Response> {
    let workflow: MergeWorkflow = state.workflow.clone();

    let (bytes, page_count) = tokio::task::spawn_blocking(move || -> Result<(Vec<u8>, usize)> {
        let artifact = workflow.run(&batch)?;
        let page_count = count_pages(artifact.path())?;
        let bytes = artifact.into_bytes()?;
        Ok((bytes, page_count))
    })
    .await
    .map_err(|e| Error::General(format!("Merge task failed: {e}")))??;

    tracing::info!(page_count, size = bytes.len(), "Returning merged document");

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.workflow.config().download_filename
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
