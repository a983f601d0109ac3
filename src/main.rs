use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use webforge::Config;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Bootstrap a new web application from the team template", long_about = None)]
struct Cli {
    /// Skip scaffolding and just start the dev server in the current directory
    #[arg(long)]
    skip_setup: bool,

    /// Project name (skips the interactive prompt)
    #[arg(long)]
    name: Option<String>,

    /// Scaffolding root directory (default: $WEBFORGE_ROOT or ~/webapps)
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "🛠  WebForge".bold());

    if cli.skip_setup {
        return commands::dev::execute();
    }

    let config = Config::load(cli.root)?;
    commands::new::execute(&config, cli.name)
}
