use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::Html,
};
use tracing::debug;

use crate::api::errors::HtmlError;
use crate::api::AppState;
use crate::config::UploadConfig;
use crate::errors::KdumpCheckError;
use crate::models::AnalysisReport;
use crate::pipeline::analyze_upload;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.pages.render_index())
}

pub async fn upload_form(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, HtmlError> {
    let upload_id = new_upload_id();
    let result: Result<AnalysisReport, KdumpCheckError> = async {
        let multipart = multipart.map_err(|e| KdumpCheckError::Upload(e.body_text()))?;
        let bytes = read_upload(multipart, &state.config.upload).await?;
        run_analysis(&state, &upload_id, bytes).await
    }
    .await;

    match result {
        Ok(report) => Ok(Html(state.pages.render_report(&report))),
        Err(error) => {
            error.log_failure(&upload_id);
            Err(HtmlError { error, pages: state.pages.clone() })
        }
    }
}

pub fn new_upload_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Pull the configured file field out of a multipart body.
pub async fn read_upload(
    mut multipart: Multipart,
    upload: &UploadConfig,
) -> Result<Vec<u8>, KdumpCheckError> {
    let multipart_error = |e: axum::extract::multipart::MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            KdumpCheckError::PayloadTooLarge(upload.max_bytes)
        } else {
            KdumpCheckError::Upload(e.body_text())
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(upload.field_name.as_str()) {
            continue;
        }
        let filename = field.file_name().unwrap_or("report.xml").to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        debug!(filename = %filename, bytes = bytes.len(), "Received upload");
        return Ok(bytes.to_vec());
    }

    Err(KdumpCheckError::MissingFile(upload.field_name.clone()))
}

/// Run staging, decoding and extraction off the async executor.
pub async fn run_analysis(
    state: &AppState,
    upload_id: &str,
    bytes: Vec<u8>,
) -> Result<AnalysisReport, KdumpCheckError> {
    let extractor = state.extractor.clone();
    let config = state.config.clone();
    let upload_id = upload_id.to_string();

    tokio::task::spawn_blocking(move || {
        analyze_upload(&extractor, &config.upload, &upload_id, &bytes)
    })
    .await
    .map_err(|e| KdumpCheckError::Internal(format!("Analysis task failed: {}", e)))?
}
