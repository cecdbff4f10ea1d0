use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::AreaMethod;
use crate::domain::area::MAX_DECIMALS;

/// Output style for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_area_decimals() -> u8 {
    2
}
fn default_hectare_decimals() -> u8 {
    4
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub method: AreaMethod,
    #[serde(default = "default_area_decimals")]
    pub area_decimals: u8,
    #[serde(default = "default_hectare_decimals")]
    pub hectare_decimals: u8,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            method: AreaMethod::default(),
            area_decimals: default_area_decimals(),
            hectare_decimals: default_hectare_decimals(),
            format: OutputFormat::default(),
        }
    }
}

impl FileConfig {
    /// Load the first parsable config file from the standard locations
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => warn!("Failed to load config file {:?}: {:#}", path, e),
            }
        }
        None
    }

    /// Load an explicit config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Reject settings that parse but cannot be honored
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("area_decimals", self.area_decimals),
            ("hectare_decimals", self.hectare_decimals),
        ] {
            if value > MAX_DECIMALS {
                bail!("{} must be at most {}, got {}", key, MAX_DECIMALS, value);
            }
        }
        Ok(())
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("fieldarea.toml"));
    paths.push(PathBuf::from(".fieldarea.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("fieldarea").join("config.toml"));
        paths.push(config_dir.join("fieldarea.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".fieldarea.toml"));
        paths.push(home.join(".config").join("fieldarea").join("config.toml"));
    }

    paths
}
