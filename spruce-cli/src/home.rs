use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Root of all on-disk state. `SPRUCE_HOME` overrides the default
/// `~/.spruce`, mainly for tests and throwaway setups.
pub fn spruce_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SPRUCE_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".spruce"))
}

pub fn ensure_spruce_home() -> Result<PathBuf> {
    let dir = spruce_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Per-user store files live under `<home>/data/`.
pub fn data_dir() -> Result<PathBuf> {
    Ok(ensure_spruce_home()?.join("data"))
}
