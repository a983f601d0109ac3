//! The ordered scaffolding pipeline: template clone → fresh history →
//! dependency install → manifest patch.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::environment::{gh_command, npm_command};
use crate::git;
use crate::manifest;
use crate::paths;
use crate::process;

/// Template repository every new project starts from.
pub const TEMPLATE_REPO_URL: &str = "https://github.com/AndrewDonelson/my-app";

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Clone the template and turn it into a standalone project.
///
/// Strictly sequential and not idempotent: the first failing step aborts
/// the run and earlier steps are not undone. Partial state stays on disk
/// for the user to inspect or remove.
pub fn create_project(root: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create scaffolding root {}", root.display()))?;

    // The prompt already checked for a collision; re-check here in case a
    // directory appeared between the prompt and the clone.
    let project = paths::project_dir(root, name);
    if paths::dir_exists(&project)? {
        anyhow::bail!("Directory {} already exists", project.display());
    }

    println!("Creating new WebApp: {}", name);

    let target = project.to_string_lossy();
    process::run(
        gh_command(),
        &["repo", "clone", TEMPLATE_REPO_URL, target.as_ref()],
        root,
    )
    .context("Failed to clone template repository")?;

    git::strip_history(&project).context("Failed to remove template git history")?;
    git::init(&project).context("Failed to reinitialize git repository")?;
    git::add_all(&project).context("Failed to stage initial files")?;
    git::commit(&project, INITIAL_COMMIT_MESSAGE).context("Failed to create initial commit")?;
    println!("  ✓ Reinitialized git history");

    reset_dependencies(&project)?;

    println!("Installing dependencies...");
    process::run(npm_command(), &["install"], &project)
        .context("Failed to install dependencies")?;

    manifest::patch_predev(&project).context("Failed to patch package.json predev script")?;
    println!("  ✓ Disabled predev setup hook (backup written)");

    Ok(project)
}

/// Drop any dependency state the template shipped with. Absence is not an
/// error; the install step recreates both.
fn reset_dependencies(project: &Path) -> Result<()> {
    let modules = paths::node_modules_dir(project);
    match fs::remove_dir_all(&modules) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to remove {}", modules.display()))
        }
    }

    let lockfile = paths::lockfile_path(project);
    match fs::remove_file(&lockfile) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to remove {}", lockfile.display()))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_aborts_before_any_step_runs() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("taken")).unwrap();

        let err = create_project(root.path(), "taken").unwrap_err();
        assert!(err.to_string().contains("already exists"));
        // Nothing was cloned into or deleted from the colliding directory.
        assert!(root.path().join("taken").exists());
    }

    #[test]
    fn test_reset_dependencies_removes_installed_state() {
        let project = tempfile::tempdir().unwrap();
        let modules = paths::node_modules_dir(project.path());
        fs::create_dir_all(modules.join("left-pad")).unwrap();
        fs::write(paths::lockfile_path(project.path()), "{}").unwrap();

        reset_dependencies(project.path()).unwrap();
        assert!(!modules.exists());
        assert!(!paths::lockfile_path(project.path()).exists());
    }

    #[test]
    fn test_reset_dependencies_tolerates_absence() {
        let project = tempfile::tempdir().unwrap();
        assert!(reset_dependencies(project.path()).is_ok());
    }
}
