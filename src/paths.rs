//! Single source of truth for the scaffolded-project filesystem layout.
//!
//! This module defines WHERE things live. It has no business logic and no
//! I/O beyond the existence probe at the bottom.
//!
//! ```text
//! ~/webapps/                       # scaffolding root (configurable)
//! └── <project>/
//!     ├── .git/                    # reinitialized after the clone
//!     ├── .env.local               # written by the template's setup script
//!     ├── node_modules/            # recreated by `npm install`
//!     ├── package-lock.json
//!     ├── package.json
//!     └── package.json.backup      # verbatim copy taken before patching
//! ```

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default scaffolding root: `~/webapps`
pub fn default_scaffold_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("webapps")
}

/// Directory a project is created in: `{root}/{name}`
pub fn project_dir(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}

/// The project manifest: `package.json`
pub fn manifest_path(project: &Path) -> PathBuf {
    project.join("package.json")
}

/// Verbatim pre-patch copy of the manifest: `package.json.backup`
pub fn manifest_backup_path(project: &Path) -> PathBuf {
    project.join("package.json.backup")
}

/// Marker file the template's setup script writes: `.env.local`
pub fn env_marker_path(project: &Path) -> PathBuf {
    project.join(".env.local")
}

/// Version-control metadata carried over by the clone: `.git/`
pub fn git_metadata_dir(project: &Path) -> PathBuf {
    project.join(".git")
}

/// Installed dependencies: `node_modules/`
pub fn node_modules_dir(project: &Path) -> PathBuf {
    project.join("node_modules")
}

/// Dependency lock file: `package-lock.json`
pub fn lockfile_path(project: &Path) -> PathBuf {
    project.join("package-lock.json")
}

/// Existence check where "not found" is the only does-not-exist signal.
/// Any other stat failure (permissions, I/O) is an error, not absence.
pub fn dir_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to stat {}", path.display())),
    }
}
