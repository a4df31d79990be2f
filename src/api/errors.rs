use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, warn};

use super::models::ErrorResponse;
use crate::errors::KdumpCheckError;
use crate::reporting::PageRenderer;

impl KdumpCheckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            KdumpCheckError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ if self.classify().client_error => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log a request-terminal failure at a level matching its cause.
    pub fn log_failure(&self, upload_id: &str) {
        let class = self.classify();
        if class.client_error {
            warn!(upload_id, error_type = class.error_type, error = %self, "Rejected upload");
        } else {
            error!(upload_id, error_type = class.error_type, error = %self, "Upload failed");
        }
    }
}

impl IntoResponse for KdumpCheckError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            error_type: self.classify().error_type.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Error rendered as an HTML page for the browser form.
pub struct HtmlError {
    pub error: KdumpCheckError,
    pub pages: Arc<PageRenderer>,
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let page = self.pages.render_error(status.as_u16(), &self.error.to_string());
        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            KdumpCheckError::MalformedDocument("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            KdumpCheckError::MissingFile("file".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            KdumpCheckError::PayloadTooLarge(10).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            KdumpCheckError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
