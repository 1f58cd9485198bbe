use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use regen_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

/// `REGEN_CONFIG` if set, else `config.json` in the working directory when present
fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("REGEN_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

pub fn load_config() -> anyhow::Result<Config> {
    match config_path() {
        Some(path) => load_from_file(&path),
        None => {
            tracing::info!("No config file found, using defaults");
            Ok(Config::new())
        }
    }
}

/// File values first, environment overrides on top
pub fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let mut config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.apply_env();
    Ok(config)
}
