/*
 * Scenegraph Index - incremental reference-count cache for scene files
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Common models (LocalId, StalenessToken, InputIdentity) and markers
 * - features/  : Vertical slices (scene_source → parsing → graph_store → asset_cache)
 * - config/    : BuildConfig and its YAML schema
 * - errors.rs  : SceneCacheError / ErrorKind
 *
 * Builds are cooperative: the caller's interruption check may cancel a build
 * between batches of objects, and the next build of the unchanged input
 * continues where the cancelled one stopped.
 */

//! # Example
//!
//! ```no_run
//! use scenegraph_index::{AssetCache, NoInterrupt};
//!
//! # fn main() -> scenegraph_index::Result<()> {
//! let mut cache = AssetCache::new();
//! let store = cache.build("Assets/Scenes/Main.unity", &mut NoInterrupt)?;
//! cache.merge("Assets/Scenes/Main.unity", store)?;
//!
//! let usages = cache.get_reference_count(705507994)?;
//! let components = cache.get_components(705507993)?;
//! # let _ = (usages, components);
//! # Ok(())
//! # }
//! ```

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and constants
pub mod shared;

/// Feature modules
pub mod features;

/// Build configuration
pub mod config;

/// Error types
pub mod errors;

pub use config::{BuildConfig, ConfigError};
pub use errors::{ErrorKind, Result, SceneCacheError};
pub use features::asset_cache::{AssetCache, AssetCacheUseCase, CacheState, MergedIndex};
pub use features::graph_store::{
    AssetReference, EntityKind, GraphStats, GraphStore, GraphStoreError, SceneEntity,
    ValidationIssue, ValidationReport,
};
pub use features::parsing::{
    BufLineReader, Cancelled, IncrementalParser, InterruptCheck, LineReader, NoInterrupt,
    ParserPhase,
};
pub use features::scene_source::{FileSystemSource, InMemorySource, SceneSource};
pub use shared::models::{InputIdentity, LocalId, StalenessToken};
