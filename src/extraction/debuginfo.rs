use std::sync::LazyLock;
use regex::Regex;

use crate::models::DebuginfoVerdict;

pub const DEBUGINFO_NOT_FOUND: &str = "kernel-debuginfo version not found";

/// Package name prefix that precedes each installed version in `rpm -q` output.
pub const PACKAGE_PREFIX: &str = "kernel-debuginfo-";

static STDOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<stdout>(.*?)</stdout>").unwrap()
});

/// Contents of the first `<stdout>` element in a command block, or the whole
/// block when there is none.
pub fn stdout_of(block: &str) -> Option<String> {
    let stdout = STDOUT_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map_or(block, |m| m.as_str());
    Some(stdout.to_string())
}

/// Version tokens following each package prefix.
pub fn candidates(stdout: &str) -> Vec<&str> {
    stdout
        .split(PACKAGE_PREFIX)
        .skip(1)
        .filter_map(|chunk| chunk.split_whitespace().next())
        .collect()
}

/// Compare the running kernel release against installed debuginfo versions.
///
/// A single version is compared exactly. With several versions installed the
/// verdict is [`DebuginfoVerdict::SomeMatch`] when at least one equals the
/// release and [`DebuginfoVerdict::NoneMatch`] otherwise. Older reports
/// flagged "some match" when any version differed; that condition is inverted.
pub fn cross_check(release: &str, versions: &[&str]) -> DebuginfoVerdict {
    match versions {
        [] => DebuginfoVerdict::NotFound,
        [single] if *single == release => DebuginfoVerdict::Match,
        [_] => DebuginfoVerdict::Mismatch,
        many if many.iter().any(|v| *v == release) => DebuginfoVerdict::SomeMatch,
        _ => DebuginfoVerdict::NoneMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE: &str = "5.14.0-1.el9.x86_64";

    #[test]
    fn test_single_matching_version() {
        assert_eq!(cross_check(RELEASE, &["5.14.0-1.el9.x86_64"]), DebuginfoVerdict::Match);
    }

    #[test]
    fn test_single_differing_version() {
        assert_eq!(cross_check(RELEASE, &["5.14.0-2.el9.x86_64"]), DebuginfoVerdict::Mismatch);
    }

    #[test]
    fn test_multiple_versions_one_matches() {
        let versions = ["5.14.0-2.el9.x86_64", RELEASE];
        assert_eq!(cross_check(RELEASE, &versions), DebuginfoVerdict::SomeMatch);
    }

    #[test]
    fn test_multiple_versions_none_match() {
        let versions = ["5.14.0-2.el9.x86_64", "5.14.0-3.el9.x86_64"];
        assert_eq!(cross_check(RELEASE, &versions), DebuginfoVerdict::NoneMatch);
    }

    #[test]
    fn test_no_versions() {
        assert_eq!(cross_check(RELEASE, &[]), DebuginfoVerdict::NotFound);
    }

    #[test]
    fn test_candidates_from_rpm_output() {
        let stdout = "kernel-debuginfo-5.14.0-1.el9.x86_64\nkernel-debuginfo-5.14.0-2.el9.x86_64\n";
        assert_eq!(candidates(stdout), vec!["5.14.0-1.el9.x86_64", "5.14.0-2.el9.x86_64"]);
    }

    #[test]
    fn test_candidates_ignore_not_installed_message() {
        assert!(candidates("package kernel-debuginfo is not installed").is_empty());
    }

    #[test]
    fn test_stdout_element_is_isolated() {
        let block = r#"" return-value="0">
<stdout>kernel-debuginfo-5.14.0-1.el9.x86_64
</stdout>
<stderr>warning: kernel-debuginfo-0.0 is bogus</stderr>"#;
        let stdout = stdout_of(block).unwrap();
        assert_eq!(candidates(&stdout), vec!["5.14.0-1.el9.x86_64"]);
    }

    #[test]
    fn test_block_without_stdout_element() {
        let stdout = stdout_of("kernel-debuginfo-5.14.0-1.el9.x86_64").unwrap();
        assert_eq!(candidates(&stdout), vec!["5.14.0-1.el9.x86_64"]);
    }

    #[test]
    fn test_empty_stdout_has_no_candidates() {
        let stdout = stdout_of("<stdout></stdout>").unwrap();
        assert!(candidates(&stdout).is_empty());
    }
}
