use super::types::KdumpCheckError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// True when the request itself was bad, false for failures on our side.
    pub client_error: bool,
}

impl KdumpCheckError {
    /// Classify this error as bad input or internal failure.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Bad input
            KdumpCheckError::Upload(_) => ErrorClassification {
                error_type: "UploadError",
                client_error: true,
            },
            KdumpCheckError::MissingFile(_) => ErrorClassification {
                error_type: "MissingFileError",
                client_error: true,
            },
            KdumpCheckError::PayloadTooLarge(_) => ErrorClassification {
                error_type: "PayloadTooLargeError",
                client_error: true,
            },
            KdumpCheckError::MalformedDocument(_) => ErrorClassification {
                error_type: "MalformedDocumentError",
                client_error: true,
            },

            // Internal failure
            KdumpCheckError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                client_error: false,
            },
            KdumpCheckError::Io(_) => ErrorClassification {
                error_type: "IoError",
                client_error: false,
            },
            KdumpCheckError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                client_error: false,
            },
            KdumpCheckError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                client_error: false,
            },
            KdumpCheckError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                client_error: false,
            },
        }
    }
}
