//! Build configuration and its YAML schema

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::shared::constants::build::DEFAULT_INTERRUPT_BATCH;

/// Supported YAML schema versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Tunables of the build/merge cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildConfig {
    /// Object dispatches between two calls of the interruption check
    pub interrupt_batch: usize,

    /// Precompute inbound reference counts at merge time.
    /// When off, every reference-count query scans all entities.
    pub reverse_index: bool,

    /// Run the store validity diagnostic at merge and log its findings
    pub validate_on_merge: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            interrupt_batch: DEFAULT_INTERRUPT_BATCH,
            reverse_index: true,
            validate_on_merge: false,
        }
    }
}

impl BuildConfig {
    pub fn with_interrupt_batch(mut self, batch: usize) -> Self {
        self.interrupt_batch = batch;
        self
    }

    pub fn with_reverse_index(mut self, enabled: bool) -> Self {
        self.reverse_index = enabled;
        self
    }

    pub fn with_validate_on_merge(mut self, enabled: bool) -> Self {
        self.validate_on_merge = enabled;
        self
    }

    /// Range checks
    pub fn validate(&self) -> ConfigResult<()> {
        if self.interrupt_batch == 0 {
            return Err(ConfigError::range_with_hint(
                "interrupt_batch",
                self.interrupt_batch,
                1,
                usize::MAX,
                "Use 1 to check for interruption after every object.",
            ));
        }
        Ok(())
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&export.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = export.build.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Serialize as a versioned YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            build: Some(self.clone()),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,
}
