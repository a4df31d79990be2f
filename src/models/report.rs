use serde::{Deserialize, Serialize};

/// A decoded rhcert kdump test document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationReport {
    pub rhcert_version: String,
    pub rhcert_release: String,
    pub hardware: Hardware,
    /// Inner markup of the root element, kept verbatim (entities are not decoded).
    pub log_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardware {
    /// Running kernel release, e.g. `5.14.0-427.13.1.el9_4.x86_64`.
    pub release: String,
    pub os: OsInfo,
    pub model: String,
    pub make: String,
    pub vendor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    pub release: String,
    pub product: String,
}
