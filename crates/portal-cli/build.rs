//! Embeds the package version and the current commit into `PORTAL_VERSION`.

use std::env;
use std::path::Path;
use std::process::Command;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let git_head = Path::new(&manifest_dir).join("../../.git/HEAD");
    if git_head.exists() {
        println!("cargo:rerun-if-changed={}", git_head.display());
    }

    let package = env!("CARGO_PKG_VERSION");
    let version = match commit_hash() {
        Some(hash) => format!("{} ({})", package, hash),
        None => package.to_string(),
    };

    println!("cargo:rustc-env=PORTAL_VERSION={}", version);
}

/// Short hash of `HEAD`, suffixed with `-dirty` when the tree has changes.
fn commit_hash() -> Option<String> {
    let hash = git(&["rev-parse", "--short", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"]).is_some();

    Some(if dirty { format!("{}-dirty", hash) } else { hash })
}

/// Trimmed stdout of a successful git command, or `None` if it failed or
/// printed nothing.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let stdout = stdout.trim();
    (!stdout.is_empty()).then(|| stdout.to_string())
}
