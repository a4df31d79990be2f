use thiserror::Error;

#[derive(Debug, Error)]
pub enum KdumpCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("No file provided in field '{0}'")]
    MissingFile(String),

    #[error("File too large: limit is {0} bytes")]
    PayloadTooLarge(u64),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
