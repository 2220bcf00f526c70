//! Typed façade over parser, store and merged indices

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::errors::{Result, SceneCacheError};
use crate::features::asset_cache::domain::{CacheState, MergedIndex};
use crate::features::graph_store::GraphStore;
use crate::features::parsing::{IncrementalParser, InterruptCheck, ParserPhase};
use crate::features::scene_source::{FileSystemSource, SceneSource};
use crate::shared::models::LocalId;

/// Reference-count cache of one scene at a time.
///
/// `build` parses (resuming across cancellations), `merge` derives the query
/// indices, and only then do the query methods answer. A later build does not
/// disturb a merged index; the next successful merge replaces it.
pub struct AssetCache<S: SceneSource = FileSystemSource> {
    source: S,
    config: BuildConfig,
    parser: IncrementalParser,

    /// Last finished build, merged or not
    built: Option<Arc<GraphStore>>,

    merged: Option<MergedIndex>,
}

impl AssetCache<FileSystemSource> {
    /// Cache over files on disk with default configuration
    pub fn new() -> Self {
        Self::with_source(FileSystemSource::new())
    }
}

impl Default for AssetCache<FileSystemSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SceneSource> AssetCache<S> {
    pub fn with_source(source: S) -> Self {
        Self::from_parts(source, BuildConfig::default())
    }

    /// Cache with explicit configuration; rejects out-of-range settings
    pub fn with_config(source: S, config: BuildConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(source, config))
    }

    fn from_parts(source: S, config: BuildConfig) -> Self {
        Self {
            parser: IncrementalParser::new(config.interrupt_batch),
            source,
            config,
            built: None,
            merged: None,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source, e.g. to replace in-memory text
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    // ============================================================
    // Lifecycle
    // ============================================================

    /// Parse `path` to completion.
    ///
    /// Resumes an earlier cancelled build when the input is unchanged and
    /// restarts otherwise. `Cancelled` from `interrupt` is returned as is and
    /// the next call continues from the same line.
    pub fn build(
        &mut self,
        path: impl AsRef<Path>,
        interrupt: &mut dyn InterruptCheck,
    ) -> Result<Arc<GraphStore>> {
        let path = path.as_ref();
        let identity = self.source.identify(path)?;

        let source = &self.source;
        let store = self.parser.run(identity, || source.open(path), interrupt)?;

        self.built = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Make a finished build queryable.
    ///
    /// The store must come from a completed build of `path`. On failure the
    /// previously merged index, if any, stays in place.
    pub fn merge(&mut self, path: impl AsRef<Path>, store: Arc<GraphStore>) -> Result<()> {
        let path = path.as_ref();

        if !store.is_complete() {
            return Err(SceneCacheError::InvalidResultType);
        }
        if store.path() != path {
            return Err(SceneCacheError::IdentityMismatch {
                expected: path.to_path_buf(),
                built: store.path().to_path_buf(),
            });
        }

        if self.config.validate_on_merge {
            let report = store.validate();
            for issue in &report.issues {
                warn!(path = ?path, %issue, "scene validation");
            }
        }

        let index = MergedIndex::new(store, self.config.reverse_index);
        info!(
            path = ?path,
            containers = index.container_count(),
            others = index.other_count(),
            type_markers = index.type_marker_count(),
            "merge complete"
        );

        self.built = Some(Arc::clone(index.store()));
        self.merged = Some(index);
        Ok(())
    }

    /// Build and merge in one step
    pub fn refresh(
        &mut self,
        path: impl AsRef<Path>,
        interrupt: &mut dyn InterruptCheck,
    ) -> Result<()> {
        let path = path.as_ref();
        let store = self.build(path, interrupt)?;
        self.merge(path, store)
    }

    /// Forget parser progress, the last build and the merged index
    pub fn reset(&mut self) {
        debug!("asset cache reset");
        self.parser.reset();
        self.built = None;
        self.merged = None;
    }

    pub fn state(&self) -> CacheState {
        if self.merged.is_some() {
            CacheState::Ready
        } else if self.built.is_some() {
            CacheState::Built
        } else {
            CacheState::NotReady
        }
    }

    pub fn is_ready(&self) -> bool {
        self.merged.is_some()
    }

    pub fn parser_phase(&self) -> ParserPhase {
        self.parser.phase()
    }

    // ============================================================
    // Queries (Ready only)
    // ============================================================

    /// Usage of a local identifier; see [`MergedIndex::reference_count`]
    pub fn get_reference_count(&self, anchor: LocalId) -> Result<usize> {
        Ok(self.index()?.reference_count(anchor))
    }

    /// Occurrences of `guid`; 0 for unknown GUIDs
    pub fn get_guid_usage(&self, guid: &str) -> Result<usize> {
        Ok(self.index()?.guid_usage(guid))
    }

    /// Components of a container; empty for anything else
    pub fn get_components(&self, container: LocalId) -> Result<&[LocalId]> {
        Ok(self.index()?.components(container))
    }

    /// The merged store
    pub fn store(&self) -> Result<&Arc<GraphStore>> {
        Ok(self.index()?.store())
    }

    fn index(&self) -> Result<&MergedIndex> {
        self.merged.as_ref().ok_or(SceneCacheError::NotReady)
    }
}

// ============================================================
// Tests
// ============================================================
