use anyhow::{Context, Result};

use webforge::environment::{npm_command, Environment};
use webforge::process;

/// `--skip-setup`: treat the current directory as an already-forged project
/// and just start its dev server.
pub fn execute() -> Result<()> {
    let environment = Environment::detect();
    environment.check_prerequisites()?;

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    process::run(npm_command(), &["run", "dev"], &cwd)
        .context("Failed to start development server")
}
