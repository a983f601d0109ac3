use anyhow::{Context, Result};

use webforge::environment::{gh_command, git_command, npm_command, Environment};
use webforge::{manifest, namer, paths, process, scaffold, Config};

/// Scaffold a new project and hand off to its dev server.
pub fn execute(config: &Config, name_arg: Option<String>) -> Result<()> {
    let environment = Environment::detect();
    environment.check_prerequisites()?;

    for tool in [git_command(), gh_command(), npm_command()] {
        if let Some(info) = environment.tools.get(tool) {
            let version = info.version.as_deref().unwrap_or("detected");
            println!("  ✓ {}: {}", tool, version);
        }
    }

    let name = match name_arg {
        // --name skips the prompt; an invalid or colliding value is fatal
        // rather than re-prompted, there is nobody to ask.
        Some(name) => {
            namer::validate_name(&name)?;
            let target = paths::project_dir(&config.scaffold_root, &name);
            if paths::dir_exists(&target)? {
                anyhow::bail!("Directory {} already exists", target.display());
            }
            name
        }
        None => {
            let stdin = std::io::stdin();
            namer::prompt_name(&mut stdin.lock(), &config.scaffold_root)?
        }
    };

    let project = scaffold::create_project(&config.scaffold_root, &name)?;
    println!("  ✓ Project created at {}", project.display());

    if manifest::setup_already_ran(&project) {
        println!("Setup script has already run. Starting development server...");
    }

    process::run(npm_command(), &["run", "dev"], &project)
        .context("Failed to start development server")?;

    Ok(())
}
