//! Asset Cache UseCase
//!
//! Host-facing contract in which build results travel as opaque values. The
//! host stores whatever `build` returned and hands it back to `merge`.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use super::asset_cache::AssetCache;
use crate::errors::{Result, SceneCacheError};
use crate::features::graph_store::GraphStore;
use crate::features::parsing::InterruptCheck;
use crate::features::scene_source::SceneSource;
use crate::shared::models::LocalId;

/// Asset Cache UseCase Trait
pub trait AssetCacheUseCase {
    fn build(
        &mut self,
        path: &Path,
        interrupt: &mut dyn InterruptCheck,
    ) -> Result<Box<dyn Any + Send + Sync>>;

    /// Fails with `InvalidResultType` unless `result` came from `build`
    fn merge(&mut self, path: &Path, result: Box<dyn Any + Send + Sync>) -> Result<()>;

    fn get_local_anchor_usages(&self, anchor: LocalId) -> Result<usize>;

    fn get_guid_usages(&self, guid: &str) -> Result<usize>;

    fn get_components_for(&self, anchor: LocalId) -> Result<&[LocalId]>;

    fn is_built_and_ready(&self) -> bool;
}

impl<S: SceneSource> AssetCacheUseCase for AssetCache<S> {
    fn build(
        &mut self,
        path: &Path,
        interrupt: &mut dyn InterruptCheck,
    ) -> Result<Box<dyn Any + Send + Sync>> {
        let store = AssetCache::build(self, path, interrupt)?;
        Ok(Box::new(store))
    }

    fn merge(&mut self, path: &Path, result: Box<dyn Any + Send + Sync>) -> Result<()> {
        let store = result
            .downcast::<Arc<GraphStore>>()
            .map_err(|_| SceneCacheError::InvalidResultType)?;
        AssetCache::merge(self, path, *store)
    }

    fn get_local_anchor_usages(&self, anchor: LocalId) -> Result<usize> {
        self.get_reference_count(anchor)
    }

    fn get_guid_usages(&self, guid: &str) -> Result<usize> {
        self.get_guid_usage(guid)
    }

    fn get_components_for(&self, anchor: LocalId) -> Result<&[LocalId]> {
        self.get_components(anchor)
    }

    fn is_built_and_ready(&self) -> bool {
        self.is_ready()
    }
}
