use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Multipart limit of the upload form, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 << 20;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    /// Served under `/static` when set.
    pub static_dir: Option<PathBuf>,
    /// Recommended-solution entries added to the built-in table.
    pub solutions: Vec<SolutionEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8088,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
    /// Directory for staged uploads; the system temp dir when unset.
    pub staging_dir: Option<PathBuf>,
    pub field_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            staging_dir: None,
            field_name: "file".to_string(),
        }
    }
}

impl UploadConfig {
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SolutionEntry {
    pub kernel_release: String,
    pub os_release: String,
    pub vmcore_status: String,
    pub url: String,
    /// Set to `false` for references that still need confirming; rendered with a warning.
    #[serde(default = "default_verified")]
    pub verified: bool,
}

fn default_verified() -> bool {
    true
}
