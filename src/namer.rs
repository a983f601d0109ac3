//! Interactive project naming.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::paths;

/// Name used when the user just presses enter.
pub const DEFAULT_PROJECT_NAME: &str = "my-new-app";

/// Characters that are unsafe in a directory name on at least one
/// supported platform.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Reject names that can't become a directory everywhere we run.
pub fn validate_name(name: &str) -> Result<()> {
    if let Some(bad) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        anyhow::bail!(
            "Project name must not contain '{}' (none of \\ / : * ? \" < > | are allowed)",
            bad
        );
    }
    Ok(())
}

/// Prompt until a valid, unused name is read. Input arrives through
/// `reader` so tests can inject lines instead of owning the console.
///
/// Blank input falls back to [`DEFAULT_PROJECT_NAME`]; so does end of
/// input, at which point a collision becomes fatal instead of re-prompting
/// (there is no more input to ask for).
pub fn prompt_name(reader: &mut impl BufRead, root: &Path) -> Result<String> {
    loop {
        print!(
            "Enter the name for your new WebApp (default: {}): ",
            DEFAULT_PROJECT_NAME
        );
        std::io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            println!();
            let target = paths::project_dir(root, DEFAULT_PROJECT_NAME);
            if paths::dir_exists(&target)? {
                anyhow::bail!("Directory {} already exists", target.display());
            }
            return Ok(DEFAULT_PROJECT_NAME.to_string());
        }

        let trimmed = line.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_PROJECT_NAME
        } else {
            trimmed
        };

        if let Err(e) = validate_name(name) {
            eprintln!("⚠️  {}", e);
            continue;
        }

        let target = paths::project_dir(root, name);
        if paths::dir_exists(&target)? {
            eprintln!(
                "⚠️  Directory {} already exists, pick another name",
                target.display()
            );
            continue;
        }

        return Ok(name.to_string());
    }
}
