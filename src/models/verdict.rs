use serde::{Deserialize, Serialize};

/// Outcome of comparing the kernel release against kernel-debuginfo versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebuginfoVerdict {
    /// The single installed version equals the kernel release.
    Match,
    /// The single installed version differs from the kernel release.
    Mismatch,
    /// Several versions installed, at least one equals the kernel release.
    SomeMatch,
    /// Several versions installed, none equals the kernel release.
    NoneMatch,
    /// No kernel-debuginfo version could be extracted.
    NotFound,
}

impl DebuginfoVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Match => "kernel-debuginfo version matches the kernel release",
            Self::Mismatch => "kernel-debuginfo version does not match the kernel release",
            Self::SomeMatch => "some kernel-debuginfo versions match the kernel release",
            Self::NoneMatch => "none of the kernel-debuginfo versions match the kernel release",
            Self::NotFound => "kernel-debuginfo version not found",
        }
    }
}

impl std::fmt::Display for DebuginfoVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
