use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shabda_config::Config;

pub const DEFAULT_PROFILE: &str = "shabda.json";

/// A named config profile on disk
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Profile> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("Invalid profile {}", path.display()))
}

/// Load the profile at `path`, then ./shabda.json, then environment defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        let profile = read_profile(path)?;
        tracing::info!("Loaded profile {} from {}", profile.name, path.display());
        return Ok(profile.value);
    }

    let default_path = PathBuf::from(DEFAULT_PROFILE);
    if default_path.exists() {
        let profile = read_profile(&default_path)?;
        tracing::debug!("Loaded profile {}", profile.name);
        return Ok(profile.value);
    }

    tracing::debug!("No profile found, using environment defaults");
    Ok(Config::new())
}

/// Write a profile holding the current defaults. Refuses to overwrite.
pub fn init_profile(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("main")
        .to_string();
    let profile = Profile {
        name,
        value: Config::new(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created profile {}", path.display());
    Ok(())
}
