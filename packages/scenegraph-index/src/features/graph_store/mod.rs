//! Graph Store - in-memory index of scene entities and external assets
//!
//! Populated by the incremental parser, then frozen with `finish()` and
//! queried by the asset cache.
//!
//! ## Architecture
//! - Domain: `SceneEntity` (with `EntityKind::{Plain, Container}`), `AssetReference`
//! - Infrastructure: `GraphStore` mutations/queries and the validity diagnostic

pub mod domain;
mod error;
pub mod infrastructure;

pub use domain::{AssetReference, EntityKind, SceneEntity};
pub use error::{GraphStoreError, GraphStoreResult};
pub use infrastructure::{GraphStats, GraphStore, ValidationIssue, ValidationReport};
