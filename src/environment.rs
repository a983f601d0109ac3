use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

use crate::process;

/// Snapshot of the external tools the scaffolder drives.
#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub tools: HashMap<String, ToolInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

/// Version-control client executable name.
pub fn git_command() -> &'static str {
    "git"
}

/// GitHub CLI executable name. Windows installs ship `gh.exe`.
pub fn gh_command() -> &'static str {
    if cfg!(windows) {
        "gh.exe"
    } else {
        "gh"
    }
}

/// Package manager executable name. On Windows npm is a `.cmd` wrapper
/// script that `CreateProcess` won't find under the bare name.
pub fn npm_command() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

impl Environment {
    pub fn detect() -> Self {
        let mut env = Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            tools: HashMap::new(),
        };

        for tool in [git_command(), gh_command(), npm_command()] {
            env.probe(tool);
        }

        env
    }

    fn probe(&mut self, tool: &str) {
        let mut tool_info = ToolInfo {
            available: false,
            version: None,
            path: None,
        };

        if let Ok(path) = which::which(tool) {
            tool_info.available = true;
            tool_info.path = Some(path.display().to_string());

            // Try to get version; gh prints a second line we don't want
            if let Ok(output) = process::run_quiet(tool, &["--version"]) {
                let first_line = output.lines().next().unwrap_or("");
                if !first_line.is_empty() {
                    tool_info.version = Some(first_line.to_string());
                }
            }
        }

        self.tools.insert(tool.to_string(), tool_info);
    }

    pub fn is_available(&self, tool: &str) -> bool {
        self.tools.get(tool).is_some_and(|info| info.available)
    }

    /// Fail fast on the first missing prerequisite. A missing tool is a
    /// user-correctable precondition, not something worth retrying.
    pub fn check_prerequisites(&self) -> Result<()> {
        for (tool, hint) in [
            (git_command(), "git is not installed or not in PATH"),
            (gh_command(), "GitHub CLI (gh) is not installed or not in PATH"),
            (npm_command(), "npm is not installed or not in PATH"),
        ] {
            if !self.is_available(tool) {
                anyhow::bail!("{}", hint);
            }
        }
        Ok(())
    }
}
