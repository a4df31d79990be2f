use std::path::Path;
use crate::errors::KdumpCheckError;
use super::types::AppConfig;
use tracing::{info, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<AppConfig, KdumpCheckError> {
    if !path.exists() {
        return Err(KdumpCheckError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(KdumpCheckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: AppConfig = if content.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Load `path` when given, otherwise fall back to defaults.
pub async fn load_config(path: Option<&Path>) -> Result<AppConfig, KdumpCheckError> {
    match path {
        Some(path) => {
            let config = parse_config(path).await?;
            info!(path = %path.display(), solutions = config.solutions.len(), "Loaded configuration");
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Reject values the server cannot run with.
fn validate_config(config: &AppConfig) -> Result<(), KdumpCheckError> {
    if config.server.port == 0 {
        return Err(KdumpCheckError::Config("server.port must be non-zero".into()));
    }

    if config.upload.max_bytes == 0 {
        return Err(KdumpCheckError::Config("upload.max_bytes must be greater than zero".into()));
    }

    if config.upload.field_name.trim().is_empty() {
        return Err(KdumpCheckError::Config("upload.field_name must not be empty".into()));
    }

    for (i, entry) in config.solutions.iter().enumerate() {
        if !(entry.url.starts_with("http://") || entry.url.starts_with("https://")) {
            return Err(KdumpCheckError::Config(format!(
                "solutions[{}]: url '{}' must start with http:// or https://",
                i, entry.url
            )));
        }
        if entry.kernel_release.is_empty() {
            return Err(KdumpCheckError::Config(format!("solutions[{}]: kernel_release is empty", i)));
        }
    }

    if let Some(dir) = &config.static_dir {
        if !dir.is_dir() {
            warn!(static_dir = %dir.display(), "Static directory does not exist");
        }
    }

    Ok(())
}
