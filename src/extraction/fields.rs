use crate::models::ExtractionResult;
use super::debuginfo::{self, DEBUGINFO_NOT_FOUND};
use super::status::{self, STATUS_NOT_FOUND, VMCORE_NOT_FOUND};

/// Turns an isolated section into the reported value; `None` means not found.
pub type PostProcessor = fn(&str) -> Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    KdumpConfig,
    UpdatedKdumpConfig,
    VmcoreStatus,
    SystemctlStatus,
    ErrorMessage,
    DebuginfoVersion,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KdumpConfig => "kdump-config",
            Self::UpdatedKdumpConfig => "updated-kdump-config",
            Self::VmcoreStatus => "vmcore-status",
            Self::SystemctlStatus => "systemctl-status",
            Self::ErrorMessage => "error-message",
            Self::DebuginfoVersion => "debuginfo-version",
        }
    }

    pub fn slot<'a>(&self, result: &'a mut ExtractionResult) -> &'a mut String {
        match self {
            Self::KdumpConfig => &mut result.kdump_config,
            Self::UpdatedKdumpConfig => &mut result.updated_kdump_config,
            Self::VmcoreStatus => &mut result.vmcore_status,
            Self::SystemctlStatus => &mut result.systemctl_status,
            Self::ErrorMessage => &mut result.error_message,
            Self::DebuginfoVersion => &mut result.debuginfo_version,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct FieldSpec {
    pub field: Field,
    pub start: &'static str,
    /// The section stops at whichever of these occurs first.
    pub ends: &'static [&'static str],
    pub not_found: &'static str,
    pub post: Option<PostProcessor>,
}

pub static FIELD_TABLE: &[FieldSpec] = &[
    FieldSpec {
        field: Field::KdumpConfig,
        start: "kdump configuration:",
        ends: &["stderr", "updated kdump configuration"],
        not_found: "kdump configuration not found",
        post: None,
    },
    FieldSpec {
        field: Field::UpdatedKdumpConfig,
        start: "updated kdump configuration:",
        ends: &["restarting kdump with new configuration.."],
        not_found: "updated kdump configuration not found",
        post: None,
    },
    FieldSpec {
        field: Field::VmcoreStatus,
        start: "Looking for vmcore image",
        ends: &["/output&gt;"],
        not_found: VMCORE_NOT_FOUND,
        post: Some(status::vmcore_status as PostProcessor),
    },
    FieldSpec {
        field: Field::SystemctlStatus,
        start: "systemctl status kdump",
        ends: &["</command>", "&lt;/command&gt;"],
        not_found: STATUS_NOT_FOUND,
        post: Some(status::active_state as PostProcessor),
    },
    FieldSpec {
        field: Field::ErrorMessage,
        start: r#"<message level="FAIL">"#,
        ends: &["</message>"],
        not_found: "",
        post: None,
    },
    FieldSpec {
        field: Field::DebuginfoVersion,
        start: "rpm -q kernel-debuginfo",
        ends: &["</command>", "&lt;/command&gt;"],
        not_found: DEBUGINFO_NOT_FOUND,
        post: Some(debuginfo::stdout_of as PostProcessor),
    },
];
