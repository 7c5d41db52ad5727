//! Simulator configuration.
//!
//! Configuration is read from a TOML file. Every section and every key is
//! optional; missing values take the defaults below.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::SimError;
use crate::core::arch::dmem::DEFAULT_DATA_SIZE;
use crate::core::pipeline::hazards::ForwardingPolicy;

/// Errors raised while loading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown register `{0}` in [init]")]
    BadRegister(String),

    #[error("invalid [init] seed: {0}")]
    Seed(#[from] SimError),
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub init: InitConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_instructions: bool,
    #[serde(default = "default_enforce_zero")]
    pub enforce_zero_register: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            enforce_zero_register: default_enforce_zero(),
        }
    }
}

fn default_enforce_zero() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub forwarding: ForwardingPolicy,
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_data_size")]
    pub data_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_size: default_data_size(),
        }
    }
}

fn default_data_size() -> usize {
    DEFAULT_DATA_SIZE
}

/// Initial register and memory contents applied before the run.
#[derive(Debug, Default, Deserialize)]
pub struct InitConfig {
    /// Register name (`x5`, `t0`, ...) to value.
    #[serde(default)]
    pub registers: BTreeMap<String, i64>,
    /// Doublewords stored little-endian at byte offsets.
    #[serde(default)]
    pub memory: Vec<MemorySeed>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct MemorySeed {
    pub offset: i64,
    pub value: i64,
}
