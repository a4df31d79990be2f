use std::sync::LazyLock;
use regex::Regex;

pub const STATUS_NOT_FOUND: &str = "status not found";
pub const VMCORE_NOT_FOUND: &str = "vmcore status not found";
pub const VMCORE_MISSING: &str = "could not locate vmcore file";

static ACTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Active:\s*(\w+)").unwrap()
});

static FOUND_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Found kdump image:[ \t]*(.*)").unwrap()
});

/// Word following `Active:` in `systemctl status` output.
pub fn active_state(block: &str) -> Option<String> {
    ACTIVE_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Vmcore lookup outcome. A missing vmcore takes priority over a found image.
pub fn vmcore_status(block: &str) -> Option<String> {
    if block.contains(VMCORE_MISSING) {
        return Some(VMCORE_MISSING.to_string());
    }
    FOUND_IMAGE_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|image| !image.is_empty())
        .map(str::to_string)
}
