use crate::{
    error::{Error, Result},
    params::ParameterSet,
    process::ExecuteOptions,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".robotrun.json", "robotrun.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    // Ordered; duplicates are meaningful
    #[serde(default)]
    pub parameters: ParameterSet,

    #[serde(default)]
    pub execution: ExecutionSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Console streams still open this long after the child exits are cut off.
    #[serde(default = "default_stream_grace_ms")]
    pub stream_grace_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    20
}

fn default_stream_grace_ms() -> u64 {
    500
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            poll_interval_ms: default_poll_interval_ms(),
            stream_grace_ms: default_stream_grace_ms(),
        }
    }
}

impl ExecutionSettings {
    /// Options for the primary invocation of an action.
    pub fn primary_options(&self) -> ExecuteOptions {
        ExecuteOptions::primary()
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms.max(1)))
            .with_stream_grace(Duration::from_millis(self.stream_grace_ms))
    }
}

impl Config {
    pub fn with_parameters(parameters: ParameterSet) -> Self {
        Self {
            parameters,
            ..Default::default()
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walks from `start_path` towards the root looking for a parameter file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }
}
