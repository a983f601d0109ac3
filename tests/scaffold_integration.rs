//! End-to-end checks for the filesystem half of the scaffolding pipeline:
//! naming against a real root, manifest patching, and setup-marker
//! detection. The external-tool steps (gh, git, npm) are exercised by the
//! unit tests of their wrappers.

use std::fs;
use std::io::Cursor;

use webforge::{manifest, namer, paths};

fn write_template_manifest(project: &std::path::Path) -> String {
    let content = format!(
        "{{\n  \"name\": \"my-app\",\n  \"version\": \"0.1.0\",\n  \"scripts\": {{\n    {},\n    \"dev\": \"next dev\",\n    \"build\": \"next build\",\n    \"start\": \"next start\"\n  }}\n}}\n",
        manifest::PREDEV_SETUP_LINE
    );
    fs::write(paths::manifest_path(project), &content).unwrap();
    content
}

#[test]
fn patched_manifest_differs_from_backup_only_in_predev_line() {
    let root = tempfile::tempdir().unwrap();
    let project = paths::project_dir(root.path(), "test-app");
    fs::create_dir_all(&project).unwrap();
    let original = write_template_manifest(&project);

    manifest::patch_predev(&project).unwrap();

    assert!(paths::manifest_path(&project).exists());
    assert!(paths::manifest_backup_path(&project).exists());

    let backup = fs::read_to_string(paths::manifest_backup_path(&project)).unwrap();
    assert_eq!(backup, original, "backup must equal the pre-patch content");

    let patched = fs::read_to_string(paths::manifest_path(&project)).unwrap();
    assert_ne!(patched, original);

    // Line-by-line: exactly one line changed, and it is the predev hook.
    let changed: Vec<(&str, &str)> = original
        .lines()
        .zip(patched.lines())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(changed.len(), 1);
    assert!(changed[0].0.contains("setup.mjs"));
    assert!(changed[0].1.contains("process.exit(0)"));
}

#[test]
fn patching_twice_leaves_hook_disabled_and_refreshes_backup() {
    let root = tempfile::tempdir().unwrap();
    let project = paths::project_dir(root.path(), "twice");
    fs::create_dir_all(&project).unwrap();
    write_template_manifest(&project);

    manifest::patch_predev(&project).unwrap();
    let once = fs::read_to_string(paths::manifest_path(&project)).unwrap();

    // Second run: the hook line is gone, so the content is stable and the
    // backup now snapshots the already-patched manifest.
    manifest::patch_predev(&project).unwrap();
    let twice = fs::read_to_string(paths::manifest_path(&project)).unwrap();
    let backup = fs::read_to_string(paths::manifest_backup_path(&project)).unwrap();

    assert_eq!(once, twice);
    assert_eq!(backup, once);
}

#[test]
fn namer_skips_names_taken_by_existing_projects() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("blog")).unwrap();
    fs::create_dir(root.path().join("shop")).unwrap();

    let mut input = Cursor::new("blog\nshop\nportfolio\n");
    let name = namer::prompt_name(&mut input, root.path()).unwrap();
    assert_eq!(name, "portfolio");
}

#[test]
fn blank_prompt_resolves_to_default_name() {
    let root = tempfile::tempdir().unwrap();
    let mut input = Cursor::new("\n");
    let name = namer::prompt_name(&mut input, root.path()).unwrap();
    assert_eq!(name, "my-new-app");
}

#[test]
fn setup_marker_controls_already_ran_detection() {
    let root = tempfile::tempdir().unwrap();
    let project = paths::project_dir(root.path(), "marked");
    fs::create_dir_all(&project).unwrap();

    assert!(!manifest::setup_already_ran(&project));

    fs::write(
        paths::env_marker_path(&project),
        "NEXT_PUBLIC_API=http://localhost:3000\nSETUP_SCRIPT_RAN=1\n",
    )
    .unwrap();
    assert!(manifest::setup_already_ran(&project));
}
