pub mod section;
pub mod status;
pub mod debuginfo;
pub mod solutions;
pub mod fields;

pub use fields::{Field, FieldSpec, FIELD_TABLE};
pub use section::{extract_between, extract_section};
pub use solutions::SolutionTable;

use tracing::debug;

use crate::models::{CertificationReport, DebuginfoVerdict, ExtractionResult};

/// Pulls named fields out of a report's log text.
///
/// Immutable once built and shared across requests.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    solutions: SolutionTable,
}

impl Extractor {
    pub fn new(solutions: SolutionTable) -> Self {
        Self { solutions }
    }

    /// Run every table entry over the log text, then derive the verdict and
    /// recommended solution. Never fails: misses resolve to sentinels.
    pub fn extract(&self, report: &CertificationReport) -> ExtractionResult {
        let release = &report.hardware.release;
        let mut result = ExtractionResult::default();
        let mut verdict = DebuginfoVerdict::NotFound;

        for (spec, value) in section_values(&report.log_text) {
            let value = match spec.field {
                Field::DebuginfoVersion => {
                    let candidates = value.as_deref().map(debuginfo::candidates).unwrap_or_default();
                    verdict = debuginfo::cross_check(release, &candidates);
                    (!candidates.is_empty()).then(|| candidates.join(" "))
                }
                _ => value,
            };

            *spec.field.slot(&mut result) = match value {
                Some(value) => value,
                None => {
                    debug!(field = %spec.field, marker = spec.start, "Field not found");
                    spec.not_found.to_string()
                }
            };
        }

        result.debuginfo_verdict = verdict.message().to_string();

        if let Some(solution) = self.solutions.find(release, &report.hardware.os.release, &result.vmcore_status) {
            result.recommended_solution = solution.url.clone();
            result.solution_unverified = !solution.verified;
        }

        debug!(
            kernel_release = %release,
            vmcore_status = %result.vmcore_status,
            systemctl_status = %result.systemctl_status,
            verdict = ?verdict,
            "Extraction complete"
        );

        result
    }
}

/// Apply each [`FIELD_TABLE`] entry to `text`: isolate, decode, post-process.
///
/// `None` marks a miss; sentinels are filled in by the caller.
pub fn section_values(text: &str) -> impl Iterator<Item = (&'static FieldSpec, Option<String>)> + '_ {
    FIELD_TABLE.iter().map(move |spec| {
        let section = extract_between(text, spec.start, spec.ends)
            .map(|raw| section::unescape(raw).into_owned());

        let value = match (section, spec.post) {
            (Some(section), Some(post)) => post(&section),
            (Some(section), None) if !section.is_empty() => Some(section),
            _ => None,
        };
        (spec, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hardware, OsInfo};

    fn report(release: &str, os_release: &str, log_text: &str) -> CertificationReport {
        CertificationReport {
            hardware: Hardware {
                release: release.to_string(),
                os: OsInfo {
                    release: os_release.to_string(),
                    product: "Red Hat Enterprise Linux".to_string(),
                },
                ..Default::default()
            },
            log_text: log_text.to_string(),
            ..Default::default()
        }
    }

    fn extract_fields(text: &str) -> ExtractionResult {
        Extractor::default().extract(&report("", "", text))
    }

    #[test]
    fn test_inline_log_fields() {
        let text = "kdump configuration: FOO stderr updated kdump configuration: BAR systemctl status kdump Active: active";
        let result = extract_fields(text);
        assert_eq!(result.kdump_config, "FOO");
        assert!(result.updated_kdump_config.starts_with("BAR"));
        assert_eq!(result.systemctl_status, "active");
    }

    #[test]
    fn test_kdump_config_stops_at_updated_config() {
        let text = "kdump configuration:\npath /var/crash\ncore_collector makedumpfile -l\nupdated kdump configuration:\npath /var/crash\nrestarting kdump with new configuration..";
        let result = extract_fields(text);
        assert_eq!(result.kdump_config, "path /var/crash\ncore_collector makedumpfile -l");
        assert_eq!(result.updated_kdump_config, "path /var/crash");
    }

    #[test]
    fn test_empty_log_resolves_to_sentinels() {
        let result = extract_fields("");
        assert_eq!(result.kdump_config, "kdump configuration not found");
        assert_eq!(result.updated_kdump_config, "updated kdump configuration not found");
        assert_eq!(result.vmcore_status, status::VMCORE_NOT_FOUND);
        assert_eq!(result.systemctl_status, status::STATUS_NOT_FOUND);
        assert_eq!(result.error_message, "");
        assert_eq!(result.debuginfo_version, debuginfo::DEBUGINFO_NOT_FOUND);
    }

    #[test]
    fn test_service_block_without_active_line() {
        let text = "systemctl status kdump\nUnit kdump.service could not be found.\nCrash recovery kernel arming";
        assert_eq!(extract_fields(text).systemctl_status, status::STATUS_NOT_FOUND);
    }

    #[test]
    fn test_failure_message_is_decoded() {
        let text = r#"<message level="FAIL">kdump service is &quot;failed&quot;</message>"#;
        assert_eq!(extract_fields(text).error_message, "kdump service is \"failed\"");
    }

    #[test]
    fn test_vmcore_block_bounded_by_escaped_output_tag() {
        let text = "Looking for vmcore image\nError: could not locate vmcore file\n&lt;/output&gt;\nFound kdump image: /var/crash/later/vmcore";
        assert_eq!(extract_fields(text).vmcore_status, status::VMCORE_MISSING);
    }

    #[test]
    fn test_verdict_match() {
        let text = r#"<command command="rpm -q kernel-debuginfo"><stdout>kernel-debuginfo-5.14.0-1.el9.x86_64</stdout></command>"#;
        let result = Extractor::default().extract(&report("5.14.0-1.el9.x86_64", "9.0", text));
        assert_eq!(result.debuginfo_version, "5.14.0-1.el9.x86_64");
        assert_eq!(result.debuginfo_verdict, DebuginfoVerdict::Match.message());
    }

    #[test]
    fn test_verdict_mismatch() {
        let text = r#"<command command="rpm -q kernel-debuginfo"><stdout>kernel-debuginfo-5.14.0-2.el9.x86_64</stdout></command>"#;
        let result = Extractor::default().extract(&report("5.14.0-1.el9.x86_64", "9.0", text));
        assert_eq!(result.debuginfo_verdict, DebuginfoVerdict::Mismatch.message());
    }

    #[test]
    fn test_verdict_not_found() {
        let result = Extractor::default().extract(&report("5.14.0-1.el9.x86_64", "9.0", ""));
        assert_eq!(result.debuginfo_verdict, DebuginfoVerdict::NotFound.message());
    }

    #[test]
    fn test_recommended_solution_for_known_triple() {
        let text = "Looking for vmcore image\nError: could not locate vmcore file\n/output&gt;";
        let extractor = Extractor::new(SolutionTable::new(&[]));
        let result = extractor.extract(&report("5.14.0-427.13.1.el9_4.x86_64", "9.4", text));
        assert_eq!(result.recommended_solution, solutions::EL9_4_VMCORE_MISSING_URL);
        assert!(result.solution_unverified);
    }

    #[test]
    fn test_configured_solution_is_verified() {
        let entry = crate::config::SolutionEntry {
            kernel_release: "5.14.0-427.13.1.el9_4.x86_64".to_string(),
            os_release: "9.4".to_string(),
            vmcore_status: status::VMCORE_MISSING.to_string(),
            url: "https://kb.example.com/kdump/7".to_string(),
            verified: true,
        };
        let text = "Looking for vmcore image\nError: could not locate vmcore file\n/output&gt;";
        let extractor = Extractor::new(SolutionTable::new(&[entry]));
        let result = extractor.extract(&report("5.14.0-427.13.1.el9_4.x86_64", "9.4", text));
        assert_eq!(result.recommended_solution, "https://kb.example.com/kdump/7");
        assert!(!result.solution_unverified);
    }

    #[test]
    fn test_escaped_command_blocks() {
        let text = concat!(
            "&lt;command command=\"systemctl status kdump\"&gt;&lt;stdout&gt;",
            "kdump.service - Crash recovery kernel arming\n   Active: inactive (dead)\n",
            "&lt;/stdout&gt;&lt;/command&gt;\n",
            "&lt;command command=\"rpm -q kernel-debuginfo\"&gt;&lt;stdout&gt;",
            "kernel-debuginfo-5.14.0-1.el9.x86_64\n&lt;/stdout&gt;&lt;/command&gt;\n",
            "later line Active: active kernel-debuginfo-5.14.0-9.el9.x86_64\n",
        );
        let result = Extractor::default().extract(&report("5.14.0-1.el9.x86_64", "9.0", text));
        assert_eq!(result.systemctl_status, "inactive");
        assert_eq!(result.debuginfo_version, "5.14.0-1.el9.x86_64");
        assert_eq!(result.debuginfo_verdict, DebuginfoVerdict::Match.message());
    }

    #[test]
    fn test_no_recommended_solution_when_vmcore_found() {
        let text = "Looking for vmcore image\nFound kdump image: /var/crash/x/vmcore\n/output&gt;";
        let extractor = Extractor::new(SolutionTable::new(&[]));
        let result = extractor.extract(&report("5.14.0-427.13.1.el9_4.x86_64", "9.4", text));
        assert_eq!(result.vmcore_status, "/var/crash/x/vmcore");
        assert_eq!(result.recommended_solution, "");
    }
}
