//! Spawning of the external tools the scaffolder orchestrates.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Run an external command, streaming its output straight to the user's
/// terminal. Blocks until the command exits. Interactive sub-tools (the
/// GitHub CLI's auth flow, npm's progress bars) work because stdin, stdout
/// and stderr are all inherited.
///
/// `cwd` is always explicit. The process-wide working directory is never
/// mutated; every step names the directory it runs in.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;

    if !status.success() {
        anyhow::bail!("{} {} exited with {}", program, args.join(" "), status);
    }

    Ok(())
}

/// Run a command with captured output and return trimmed stdout. Used for
/// probes whose output belongs in a report, not on the terminal.
pub fn run_quiet(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {}", program))?;

    if !output.status.success() {
        anyhow::bail!("{} {} exited with {}", program, args.join(" "), output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
