//! Layered configuration. Every section defaults independently, so a partial
//! TOML document only overrides the keys it names.

pub mod defaults;
mod observability_config;
mod selection_config;
mod storage_config;

pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{SieveError, SieveResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    pub selection: SelectionConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl SieveConfig {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml(source: &str) -> SieveResult<Self> {
        toml::from_str(source).map_err(|e| SieveError::ConfigError(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> SieveResult<String> {
        toml::to_string(self).map_err(|e| SieveError::ConfigError(e.to_string()))
    }
}
