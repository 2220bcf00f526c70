//! Build configuration
//!
//! Two ways to obtain a [`BuildConfig`]:
//! - Code: `BuildConfig::default().with_interrupt_batch(250)`
//! - YAML: `BuildConfig::from_yaml("scene-index.yaml")?`
//!
//! ```yaml
//! version: 1
//! build:
//!   interrupt_batch: 500
//!   reverse_index: true
//!   validate_on_merge: false
//! ```

pub mod build_config;
pub mod error;

// Re-exports
pub use build_config::{BuildConfig, ConfigExportV1};
pub use error::{ConfigError, ConfigResult};
