use anyhow::Result;
use std::path::PathBuf;

use crate::paths;

/// Environment variable overriding the scaffolding root.
pub const ROOT_ENV_VAR: &str = "WEBFORGE_ROOT";

/// Configuration for a scaffolding run
#[derive(Debug, Clone)]
pub struct Config {
    /// Parent directory new projects are created under
    pub scaffold_root: PathBuf,
}

impl Config {
    /// Load configuration. The scaffolding root resolves from the `--root`
    /// flag, then `WEBFORGE_ROOT` (tilde-expanded), then `~/webapps`.
    pub fn load(root_flag: Option<PathBuf>) -> Result<Self> {
        let env_root = std::env::var(ROOT_ENV_VAR).ok();
        Ok(Self {
            scaffold_root: resolve_root(root_flag, env_root.as_deref()),
        })
    }
}

fn resolve_root(flag: Option<PathBuf>, env_value: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(value) = env_value {
        if !value.trim().is_empty() {
            return PathBuf::from(shellexpand::tilde(value).into_owned());
        }
    }
    paths::default_scaffold_root()
}
