//! Patching of the cloned project's `package.json`.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::paths;

/// The template's pre-launch automation hook. The template runs its setup
/// script before every `npm run dev`; a freshly forged project has already
/// been configured, so the hook gets disabled in place.
pub const PREDEV_SETUP_LINE: &str = r#""predev": "node scripts/setup.mjs""#;

/// No-op replacement that keeps the script table well-formed.
pub const PREDEV_DISABLED_LINE: &str = r#""predev": "node -e \"process.exit(0)\"""#;

/// Marker the template's setup script appends to `.env.local` once it has
/// completed.
const SETUP_MARKER: &str = "SETUP_SCRIPT_RAN=1";

/// Disable the predev setup hook in `package.json`, keeping a verbatim
/// backup next to it.
///
/// This is a single literal substring replacement, not a JSON rewrite. A
/// manifest without the hook line comes back byte-identical (the backup is
/// still taken), and everything outside the matched line is untouched.
pub fn patch_predev(project: &Path) -> Result<()> {
    let manifest = paths::manifest_path(project);
    let original = fs::read_to_string(&manifest)
        .with_context(|| format!("Failed to read {}", manifest.display()))?;

    let backup = paths::manifest_backup_path(project);
    fs::write(&backup, &original)
        .with_context(|| format!("Failed to write {}", backup.display()))?;

    let patched = original.replace(PREDEV_SETUP_LINE, PREDEV_DISABLED_LINE);
    fs::write(&manifest, patched)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    Ok(())
}

/// True when `.env.local` records that the template's setup script already
/// completed. A missing or unreadable marker file just means "not yet".
pub fn setup_already_ran(project: &Path) -> bool {
    let Ok(file) = fs::File::open(paths::env_marker_path(project)) else {
        return false;
    };

    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .any(|line| line.contains(SETUP_MARKER))
}
