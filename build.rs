use std::path::Path;
use std::process::Command;

/// Stdout of a successful git invocation, trimmed.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Rebuild on checkout or commit so /api/health reports the current revision.
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
    }

    println!(
        "cargo:rustc-env=KDUMPCHECK_BUILT_AT={}",
        chrono::Utc::now().to_rfc3339()
    );

    if let Some(hash) = git(&["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=KDUMPCHECK_GIT_HASH={hash}");
    }
}
