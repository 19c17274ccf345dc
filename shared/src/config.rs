use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, types::TickDelay};

/// Name of the configuration file inside the fixer's data directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Contains Config properties which will be used by the Resync Coordinator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResyncConfig {
    /// Ticks to wait after a block place/dig intent before resyncing, so the
    /// host has applied its authoritative result first
    pub sync_delay_ticks: TickDelay,
    /// Minimum milliseconds between two accepted triggers for one actor
    pub cooldown_ms: u64,
    /// Toggles the ghost anchor check on movement
    pub enable_ghost_anchor_fix: bool,
    /// Toggles verbose diagnostic output
    pub debug_messages: bool,
}

impl Default for ResyncConfig {
    fn default() -> Self {
        Self {
            sync_delay_ticks: 1,
            cooldown_ms: 50,
            enable_ghost_anchor_fix: true,
            debug_messages: false,
        }
    }
}

impl ResyncConfig {
    /// Parses a configuration document. Keys that are absent keep their
    /// default values.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Key-value configuration file backing [`ResyncConfig`]
#[derive(Clone, Debug)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file named [`CONFIG_FILE_NAME`] inside `data_dir`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file
    pub fn load(&self) -> Result<ResyncConfig, ConfigError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        ResyncConfig::from_json_str(&raw).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the default configuration if no file exists yet, then loads it
    pub fn load_or_create(&self) -> Result<ResyncConfig, ConfigError> {
        if !self.path.exists() {
            self.write_defaults()?;
        }
        self.load()
    }

    fn write_defaults(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let contents = ResyncConfig::default()
            .to_json_pretty()
            .map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, contents).map_err(|source| self.io_error(source))?;
        info!("wrote default configuration to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
