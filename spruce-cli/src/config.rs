use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::home::ensure_spruce_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub user: String,
    /// IANA timezone name; "today" is computed in this zone.
    pub timezone: String,
    pub schedule: ScheduleSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSection {
    /// Keep the weekday essential in the daily list even when fresh.
    pub always_show_essential: bool,
    /// Energy level assumed when `--energy` is not passed.
    pub default_energy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: "default".to_string(),
            timezone: "America/Chicago".to_string(),
            schedule: ScheduleSection {
                always_show_essential: true,
                default_energy: "green".to_string(),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_spruce_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
