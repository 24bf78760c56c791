use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "luach.toml";

/// Top-level luach configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Statistics window settings.
    #[serde(default)]
    pub stats: StatsToml,

    /// Reading-schedule settings.
    #[serde(default)]
    pub parasha: ParashaToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsToml {
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default = "default_years")]
    pub years: u32,
    #[serde(default = "default_lookahead")]
    pub lookahead: u32,
}

impl Default for StatsToml {
    fn default() -> Self {
        Self {
            end_year: default_end_year(),
            years: default_years(),
            lookahead: default_lookahead(),
        }
    }
}

fn default_end_year() -> i32 {
    5786
}
fn default_years() -> u32 {
    2000
}
fn default_lookahead() -> u32 {
    500
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ParashaToml {
    /// JSON array of portion metadata.
    #[serde(default)]
    pub metadata: Option<PathBuf>,
}

impl LuachConfig {
    /// Load the config named on the command line, else `luach.toml` in the
    /// working directory if it exists, else defaults.
    ///
    /// A relative metadata path is resolved against the config file's
    /// directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG);
                if !default.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: LuachConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;

        if let (Some(metadata), Some(dir)) = (config.parasha.metadata.as_mut(), path.parent()) {
            if metadata.is_relative() {
                *metadata = dir.join(&*metadata);
            }
        }
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
