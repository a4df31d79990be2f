use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::report::CertificationReport;

pub const SOLUTION_LABEL: &str = "recommended solution";

/// Shown next to a recommended solution whose URL has not been confirmed.
pub const UNVERIFIED_NOTE: &str = "unverified reference, confirm before applying";

/// Named string results pulled out of a report's log text.
///
/// Every field is always populated: a miss resolves to a sentinel string
/// (or an empty string where documented), never to an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub kdump_config: String,
    pub updated_kdump_config: String,
    pub vmcore_status: String,
    pub systemctl_status: String,
    /// Empty when the log records no failure message.
    pub error_message: String,
    pub debuginfo_version: String,
    pub debuginfo_verdict: String,
    /// Empty when no known fix applies.
    pub recommended_solution: String,
    /// The recommended solution's URL has not been confirmed.
    #[serde(default)]
    pub solution_unverified: bool,
}

impl ExtractionResult {
    /// Display label and value for each field, in page order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("kdump configuration", self.kdump_config.as_str()),
            ("updated kdump configuration", self.updated_kdump_config.as_str()),
            ("vmcore status", self.vmcore_status.as_str()),
            ("kdump service status", self.systemctl_status.as_str()),
            ("error message", self.error_message.as_str()),
            ("kernel-debuginfo version", self.debuginfo_version.as_str()),
            ("kernel-debuginfo verdict", self.debuginfo_verdict.as_str()),
            (SOLUTION_LABEL, self.recommended_solution.as_str()),
        ]
    }
}

/// Everything rendered for one upload: document header plus extraction results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub kernel_release: String,
    pub rhel_product: String,
    pub rhel_version: String,
    pub rhcert_version: String,
    pub rhcert_release: String,
    pub model: String,
    pub make: String,
    pub vendor: String,
    #[serde(flatten)]
    pub extraction: ExtractionResult,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(report: &CertificationReport, extraction: ExtractionResult) -> Self {
        let hw = &report.hardware;
        Self {
            kernel_release: hw.release.clone(),
            rhel_product: hw.os.product.clone(),
            rhel_version: hw.os.release.clone(),
            rhcert_version: report.rhcert_version.clone(),
            rhcert_release: report.rhcert_release.clone(),
            model: hw.model.clone(),
            make: hw.make.clone(),
            vendor: hw.vendor.clone(),
            extraction,
            analyzed_at: Utc::now(),
        }
    }

    pub fn header(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("kernel release", self.kernel_release.as_str()),
            ("product", self.rhel_product.as_str()),
            ("RHEL version", self.rhel_version.as_str()),
            ("rhcert version", self.rhcert_version.as_str()),
            ("rhcert release", self.rhcert_release.as_str()),
            ("model", self.model.as_str()),
            ("make", self.make.as_str()),
            ("vendor", self.vendor.as_str()),
        ]
    }
}
