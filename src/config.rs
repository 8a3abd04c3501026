use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use homedir::my_home;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Message file used by `filter` when `--messages` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_level: default_log_level(),
            messages: None,
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// `$KQL_BASE_PATH`, or `~/.config/kql`.
pub fn base_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("KQL_BASE_PATH") {
        return Ok(PathBuf::from(path));
    }
    let home = my_home()
        .context("couldnt look up home dir")?
        .context("couldnt find home dir")?;
    Ok(home.join(".config").join("kql"))
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            bail!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            );
        }
        Ok(())
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(&base_path()?)
    }

    /// Reads `config.yaml` from `base_path`. A missing file yields the
    /// defaults.
    pub fn load_with(base_path: &Path) -> anyhow::Result<Self> {
        let path = base_path.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = serde_yml::from_str(&config_str)
            .with_context(|| format!("config is malformed: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }
}
