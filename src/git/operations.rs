//! Low-level git operations
//!
//! Every operation takes the repository directory explicitly; nothing here
//! depends on the process working directory.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Initialize a fresh repository
pub fn init(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .output()
        .context("Failed to run git init")?;

    if !output.status.success() {
        anyhow::bail!(
            "git init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Stage all changes
pub fn add_all(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .output()
        .context("Failed to stage changes")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to stage changes: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Create a commit
pub fn commit(dir: &Path, message: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir)
        .output()
        .context("Failed to create commit")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Delete the repository's version-control metadata entirely. The clone
/// arrives with the template's full history; a new project starts from none.
pub fn strip_history(dir: &Path) -> Result<()> {
    let git_dir = crate::paths::git_metadata_dir(dir);
    match std::fs::remove_dir_all(&git_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove {}", git_dir.display()))
        }
    }
}
