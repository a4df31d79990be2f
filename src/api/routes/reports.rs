use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use super::upload::{new_upload_id, read_upload, run_analysis};
use crate::api::AppState;
use crate::errors::KdumpCheckError;
use crate::models::AnalysisReport;

/// JSON variant of the upload form: same pipeline, machine-readable result.
pub async fn create_report(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, KdumpCheckError> {
    let upload_id = new_upload_id();
    let result: Result<AnalysisReport, KdumpCheckError> = async {
        let multipart = multipart.map_err(|e| KdumpCheckError::Upload(e.body_text()))?;
        let bytes = read_upload(multipart, &state.config.upload).await?;
        run_analysis(&state, &upload_id, bytes).await
    }
    .await;

    result.map(Json).map_err(|e| {
        e.log_failure(&upload_id);
        e
    })
}
