//! `POST /api`: answer one question, optionally with an uploaded file.

use std::path::Path;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::domains::rules::Question;
use crate::domains::uploads::UploadedFile;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Answer endpoint
///
/// Form fields:
/// - `question` (required, may be empty)
/// - `file` (optional; stored for the duration of the request only)
pub async fn answer_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let mut multipart = multipart.map_err(ApiError::internal)?;

    let mut question = None;
    let mut file = None;

    if let Err(e) = read_form(&mut multipart, &state.upload_dir, &mut question, &mut file).await {
        discard(file).await;
        return Err(e);
    }

    let Some(question) = question else {
        discard(file).await;
        return Err(ApiError::MissingQuestion);
    };

    info!(
        question_length = question.len(),
        has_file = file.is_some(),
        "Received question"
    );

    let answer = state.pipeline.answer(&Question::new(question), file).await;

    Ok(Json(AnswerResponse { answer }))
}

/// Fallback for any method other than POST on `/api`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Collect the form fields. A stored upload is handed back through `file` even
/// when a later field fails, so the caller can remove it.
async fn read_form(
    multipart: &mut Multipart,
    upload_dir: &Path,
    question: &mut Option<String>,
    file: &mut Option<UploadedFile>,
) -> Result<(), ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(ApiError::internal)? {
        let name = field.name().map(str::to_owned);

        match name.as_deref() {
            Some("question") => {
                *question = Some(field.text().await.map_err(ApiError::internal)?);
            }
            Some("file") => {
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(ApiError::internal)?;

                // Browsers send an empty part when no file was chosen
                if bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
                    continue;
                }

                let stored = UploadedFile::persist(upload_dir, file_name.as_deref(), &bytes)
                    .await
                    .map_err(ApiError::internal)?;
                if let Some(previous) = file.replace(stored) {
                    previous.discard().await;
                }
            }
            other => {
                debug!(field = ?other, "Ignoring unknown form field");
            }
        }
    }

    Ok(())
}

async fn discard(file: Option<UploadedFile>) {
    if let Some(file) = file {
        file.discard().await;
    }
}
