use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::SolutionEntry;
use crate::extraction::status::VMCORE_MISSING;

/// Known fix for the RHEL 9.4 GA kernel failing to write a vmcore.
///
/// The article number has not been confirmed, so the entry ships unverified.
pub const EL9_4_VMCORE_MISSING_URL: &str = "https://access.redhat.com/solutions/7068656";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionKey {
    pub kernel_release: String,
    pub os_release: String,
    pub vmcore_status: String,
}

impl SolutionKey {
    pub fn new(kernel_release: &str, os_release: &str, vmcore_status: &str) -> Self {
        Self {
            kernel_release: kernel_release.to_string(),
            os_release: os_release.to_string(),
            vmcore_status: vmcore_status.to_string(),
        }
    }
}

pub static BUILTIN_SOLUTIONS: LazyLock<Vec<SolutionEntry>> = LazyLock::new(|| vec![
    SolutionEntry {
        kernel_release: "5.14.0-427.13.1.el9_4.x86_64".to_string(),
        os_release: "9.4".to_string(),
        vmcore_status: VMCORE_MISSING.to_string(),
        url: EL9_4_VMCORE_MISSING_URL.to_string(),
        verified: false,
    },
]);

/// A fix reference and whether its URL has been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub url: String,
    pub verified: bool,
}

/// Exact-match table from (kernel release, OS release, vmcore status) to a fix URL.
#[derive(Debug, Clone, Default)]
pub struct SolutionTable {
    entries: HashMap<SolutionKey, Solution>,
}

impl SolutionTable {
    /// Built-in entries followed by `extra`; later entries replace earlier ones.
    pub fn new(extra: &[SolutionEntry]) -> Self {
        let mut table = Self::default();
        for entry in BUILTIN_SOLUTIONS.iter().chain(extra) {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: &SolutionEntry) {
        let key = SolutionKey::new(&entry.kernel_release, &entry.os_release, &entry.vmcore_status);
        let solution = Solution {
            url: entry.url.clone(),
            verified: entry.verified,
        };
        self.entries.insert(key, solution);
    }

    pub fn find(&self, kernel_release: &str, os_release: &str, vmcore_status: &str) -> Option<&Solution> {
        self.entries.get(&SolutionKey::new(kernel_release, os_release, vmcore_status))
    }

    /// Fix URL for the triple, or an empty string.
    pub fn lookup(&self, kernel_release: &str, os_release: &str, vmcore_status: &str) -> String {
        self.find(kernel_release, os_release, vmcore_status)
            .map(|solution| solution.url.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
