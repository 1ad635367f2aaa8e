//! Axum route handlers for the resume formatting API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::DocumentFormat;
use crate::state::AppState;

/// Multipart field carrying the uploaded resume.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Debug)]
struct Upload {
    file_name: String,
    data: Bytes,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub file_name: String,
    pub format: DocumentFormat,
    pub formatted_resume: String,
}

/// POST /api/v1/resumes/format
///
/// Extract → rewrite → render. Responds with the DOCX as an attachment.
pub async fn handle_format(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let span = info_span!("format_resume", request_id = %Uuid::new_v4(), file_name = %upload.file_name);

    let resume = async {
        let resume = state.pipeline.run(&upload.file_name, upload.data).await?;
        info!(chars = resume.text.chars().count(), "Sending formatted resume");
        Ok::<_, AppError>(resume)
    }
    .instrument(span)
    .await?;

    Ok((
        [
            (header::CONTENT_TYPE, resume.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", resume.file_name()),
            ),
        ],
        resume.document,
    ))
}

/// POST /api/v1/resumes/preview
///
/// Extract → rewrite only. Returns the generated text for on-screen display.
pub async fn handle_preview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PreviewResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let span = info_span!("preview_resume", request_id = %Uuid::new_v4(), file_name = %upload.file_name);

    let rewritten = state
        .pipeline
        .preview(&upload.file_name, upload.data)
        .instrument(span)
        .await?;

    Ok(Json(PreviewResponse {
        file_name: upload.file_name,
        format: rewritten.format,
        formatted_resume: rewritten.text,
    }))
}

/// Pulls the `resume` file field out of the form; other fields are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Validation(format!("The '{UPLOAD_FIELD}' field must be a file upload"))
            })?;
        let data = field.bytes().await.map_err(multipart_error)?;

        info!(file_name = %file_name, bytes = data.len(), "Resume upload received");
        return Ok(Upload { file_name, data });
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' file field"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", err.body_text()))
    }
}
