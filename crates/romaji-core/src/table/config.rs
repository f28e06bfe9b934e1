//! TOML mapping configuration.
//!
//! ```toml
//! [base]
//! "あ" = "A"
//!
//! [in]
//! "ぁ" = "xa"
//!
//! [out]
//! xa = "ぁ"
//! ```
//!
//! All three sections are optional, but at least one entry must be present.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::mapping::{Mapping, MappingError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub base: BTreeMap<String, String>,
    #[serde(default, rename = "in")]
    pub in_map: BTreeMap<String, String>,
    #[serde(default, rename = "out")]
    pub out_map: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mapping table is empty")]
    Empty,
    #[error("invalid mapping: {0}")]
    Mapping(#[from] MappingError),
    #[error("custom mapping already initialized")]
    AlreadyInitialized,
}

impl MappingConfig {
    pub fn build(&self) -> Result<Mapping, MappingError> {
        Mapping::new(
            self.base.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            self.in_map.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            self.out_map.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty() && self.in_map.is_empty() && self.out_map.is_empty()
    }
}

/// Parse and validate TOML mapping text.
///
/// The tables are built once here so that an invalid configuration is
/// rejected before anything is installed.
pub fn parse_mapping_toml(toml_str: &str) -> Result<MappingConfig, ConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    if config.is_empty() {
        return Err(ConfigError::Empty);
    }
    config.build()?;
    debug!(
        base = config.base.len(),
        in_map = config.in_map.len(),
        out_map = config.out_map.len(),
        "mapping config parsed"
    );
    Ok(config)
}

pub fn load_mapping_file(path: &Path) -> Result<MappingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_mapping_toml(&content)
}
